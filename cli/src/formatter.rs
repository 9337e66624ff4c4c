use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use shunt::{Calculation, Postfix};

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn format_calculation(&self, calculation: &Calculation, raw: bool, trace: bool) -> String {
        if raw {
            return format!("{}\n", calculation.result);
        }

        let mut output = String::new();

        if trace && !calculation.steps.is_empty() {
            output.push_str(&self.format_steps_table(calculation));
            output.push('\n');
        }

        output.push_str(&format!("= {}\n", calculation.result));
        output
    }

    fn format_steps_table(&self, calculation: &Calculation) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("#").set_alignment(CellAlignment::Right),
            Cell::new("Left").set_alignment(CellAlignment::Right),
            Cell::new("Op").set_alignment(CellAlignment::Center),
            Cell::new("Right").set_alignment(CellAlignment::Right),
            Cell::new("Result").set_alignment(CellAlignment::Right),
        ]));

        for (index, step) in calculation.steps.iter().enumerate() {
            table.add_row(Row::from(vec![
                Cell::new(index + 1).set_alignment(CellAlignment::Right),
                Cell::new(&step.left).set_alignment(CellAlignment::Right),
                Cell::new(step.operator).set_alignment(CellAlignment::Center),
                Cell::new(&step.right).set_alignment(CellAlignment::Right),
                Cell::new(&step.result).set_alignment(CellAlignment::Right),
            ]));
        }

        format!("{}\n", table)
    }

    pub fn format_postfix(&self, postfix: &Postfix) -> String {
        format!("{}\n", postfix)
    }

    pub fn format_batch_line(&self, expression: &str, calculation: &Calculation) -> String {
        format!("{} = {}", expression, calculation.result)
    }
}

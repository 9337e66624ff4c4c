// Converter tests
mod converter;

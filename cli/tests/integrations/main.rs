mod batch;
mod interactive;
mod run;
mod server;

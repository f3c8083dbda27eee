// Application layer: the console front end and the HTTP front end.

pub mod console;
pub mod http;

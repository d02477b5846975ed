mod mock;

mod persist;
mod settings;

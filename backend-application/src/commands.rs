pub mod import_commands;

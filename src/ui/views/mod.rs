mod agenda;
mod settings;

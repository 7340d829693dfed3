use console::style;

pub fn warn(text: &str) {
    eprintln!("{}", style(text).for_stderr().yellow());
}

pub fn error(text: &str) {
    eprintln!("{}", style(text).for_stderr().red());
}

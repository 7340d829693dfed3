fn main() {
    let code = match claudebar::run() {
        Ok(code) => code,
        Err(err) => {
            claudebar::ui::error(&err.to_string());
            if let Some(hint) = err.hint() {
                claudebar::ui::warn(hint);
            }
            1
        }
    };
    std::process::exit(code);
}

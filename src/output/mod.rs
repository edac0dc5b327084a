use console::style;

const BANNER_RULE: &str = "===============================================================";

pub fn step(num: usize, total: usize, msg: &str) {
    info(&format!(
        "{} {}",
        style(format!("[{}/{}]", num, total)).bold().cyan(),
        msg
    ));
}

pub fn info(msg: &str) {
    println!("{} {}", style("INFO |").bold().blue(), msg);
}

pub fn error(msg: &str) {
    println!("{} {}", style("ERROR |").bold().red(), msg);
}

/// Unprefixed line, used for underlying error messages.
pub fn plain(msg: &str) {
    println!("{}", msg);
}

pub fn banner_start() {
    println!("{} {}", BANNER_RULE, style("[START]").bold());
}

pub fn banner_end() {
    println!("{} {}", BANNER_RULE, style("[END]").bold().green());
}

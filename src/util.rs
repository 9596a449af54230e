/// Render an argument vector as a single shell-quoted command line.
pub fn format_command_line(program: Option<&str>, argv: &[String]) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(argv.len() + 1);
    if let Some(program) = program {
        parts.push(program);
    }
    parts.extend(argv.iter().map(String::as_str));
    shell_words::join(parts)
}

use log::debug;

pub fn handle_unrecognized_line(first_word: &str, line_number: usize, line: &str) {
    if first_word.starts_with('#') {
        return;
    }
    debug!("Ignoring line {line_number} \"{line}\": \"{first_word}\" is not supported");
}

/// Title-case a display name: the first character of each whitespace-separated
/// word is uppercased, the rest lowercased. Unicode-aware, so "SANTARÉM"
/// becomes "Santarém" and "ÉVORA" becomes "Évora".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

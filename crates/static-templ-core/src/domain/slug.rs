//! Case-aware kebab slugs for output file names.

/// Lowercase, hyphen-separated form of an identifier or file name.
///
/// Words break on any non-alphanumeric character and on case boundaries:
/// `HelloWorld` → `hello-world`, `render_Index` → `render-index`,
/// `HTMLPage` → `html-page`. The result never has leading, trailing or
/// doubled hyphens, which makes the function idempotent.
pub fn slugify(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            flush(&mut words, &mut current);
            continue;
        }

        if has_lowercase(c) && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (has_lowercase(prev) && next_is_lower)
            {
                flush(&mut words, &mut current);
            }
        }

        // `İ` lowercases to `i` plus a combining dot, which is not alphanumeric.
        current.extend(c.to_lowercase().filter(|l| l.is_alphanumeric()));
    }
    flush(&mut words, &mut current);

    words.join("-")
}

/// Uppercase with a lowercase form. Caseless capitals such as `𝐀` are
/// kept as they are and never start a word.
fn has_lowercase(c: char) -> bool {
    c.is_uppercase() && !c.to_lowercase().eq(std::iter::once(c))
}

fn flush(words: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

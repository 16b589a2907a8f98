/// Derive a URL-safe identifier from an example name.
///
/// Lower-cases, turns spaces and slashes into hyphens, drops apostrophes
/// and collapses runs of hyphens. Applying it twice changes nothing.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars().flat_map(char::to_lowercase) {
        let c = match c {
            ' ' | '/' => '-',
            '\'' => continue,
            c => c,
        };
        if c == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(c);
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic() {
        assert_eq!(slugify("Basic Types"), "basic-types");
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn apostrophes_removed() {
        assert_eq!(slugify("Don't Panic"), "dont-panic");
    }

    #[test]
    fn slashes_and_dash_runs() {
        assert_eq!(slugify("Reading/Writing Files"), "reading-writing-files");
        assert_eq!(slugify("Select - Timeouts"), "select-timeouts");
        assert_eq!(slugify("a--b"), "a-b");
    }

    #[test]
    fn non_ascii_kept() {
        assert_eq!(slugify("基础 类型"), "基础-类型");
    }

    #[test]
    fn idempotent() {
        for name in ["Basic Types", "Don't Panic", "a / b", "Select - Timeouts", "x''y--z"] {
            let once = slugify(name);
            assert_eq!(slugify(&once), once, "{name}");
        }
    }
}

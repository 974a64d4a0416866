//! Slug derivation for detail page routes.

/// Lowercase the name and collapse every run of whitespace into one `-`.
///
/// Leading and trailing whitespace also become a hyphen, matching a plain
/// regex replacement of `\s+`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }

    slug
}

/// Name used for the upstream by-name lookup: hyphens become spaces.
pub fn unslug(slug: &str) -> String {
    slug.replace('-', " ")
}

/// Whether `slug` can be used as one path segment of a page URL or an
/// exported directory.
pub fn is_safe_segment(slug: &str) -> bool {
    !slug.is_empty() && slug != "." && slug != ".." && !slug.contains(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("United States"), "united-states");
        assert_eq!(slugify("French Republic"), "french-republic");
    }

    #[test]
    fn test_slugify_collapses_whitespace_runs() {
        assert_eq!(slugify("Republic  of\t\nKorea"), "republic-of-korea");
        assert_eq!(slugify(" Chad "), "-chad-");
    }

    #[test]
    fn test_slugify_is_deterministic_and_lowercase() {
        let a = slugify("Kingdom of the NETHERLANDS");
        let b = slugify("Kingdom of the NETHERLANDS");
        assert_eq!(a, b);
        assert_eq!(a, a.to_lowercase());
        assert!(!a.contains(char::is_whitespace));
    }

    #[test]
    fn test_slugify_keeps_non_ascii() {
        assert_eq!(slugify("République Française"), "république-française");
    }

    #[test]
    fn test_unslug() {
        assert_eq!(unslug("united-states"), "united states");
        // Hyphens that were in the name are not recoverable.
        assert_eq!(unslug("guinea-bissau"), "guinea bissau");
    }

    #[test]
    fn test_safe_segment() {
        assert!(is_safe_segment("french-republic"));
        assert!(is_safe_segment("république-française"));
        assert!(!is_safe_segment(""));
        assert!(!is_safe_segment("."));
        assert!(!is_safe_segment(".."));
        assert!(!is_safe_segment("a/b"));
        assert!(!is_safe_segment("a\\b"));
    }
}

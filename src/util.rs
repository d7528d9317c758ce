use std::collections::HashSet;

// Marker the wiki puts on renders of the 3D models,
// e.g. "Poké Ball (model).png"
const MODEL_MARKER: &str = "(model).png";

pub fn resolve_filename(alt: &str, src: &str) -> String {
    let candidate = if !alt.is_empty() {
        alt.to_string()
    } else {
        let decoded = urlencoding::decode(src)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| src.to_string());

        decoded
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string()
    };

    let name = candidate
        .strip_suffix(MODEL_MARKER)
        .unwrap_or(&candidate)
        .trim();

    if name.ends_with(".png") {
        name.to_string()
    } else {
        format!("{}_model.png", name)
    }
}

/// Disambiguates a repeated filename as `name_2.png`, `name_3.png`, ...
/// so a later download never silently overwrites an earlier one.
pub fn unique_filename(name: &str, used: &mut HashSet<String>) -> String {
    if used.insert(name.to_string()) {
        return name.to_string();
    }

    let (stem, ext) = match name.rfind('.') {
        Some(idx) => (&name[..idx], &name[idx..]),
        None => (name, ""),
    };

    let mut n = 2;
    loop {
        let candidate = format!("{}_{}{}", stem, n, ext);
        if used.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alt_text_marker_is_stripped() {
        assert_eq!(
            resolve_filename("Poké Ball (model).png", "/ignored.png"),
            "Poké Ball_model.png"
        );
    }

    #[test]
    fn empty_alt_falls_back_to_src_segment() {
        assert_eq!(
            resolve_filename("", "/images/thumb/Great_Ball_model.png"),
            "Great_Ball_model.png"
        );
    }

    #[test]
    fn src_segment_is_percent_decoded() {
        assert_eq!(
            resolve_filename("", "/images/Pok%C3%A9_Ball_model.png"),
            "Poké_Ball_model.png"
        );
    }

    #[test]
    fn png_suffix_appended_when_missing() {
        assert_eq!(
            resolve_filename("Master Ball", "/images/mb.jpeg"),
            "Master Ball_model.png"
        );
    }

    #[test]
    fn empty_alt_and_src_degenerate_to_the_bare_suffix() {
        assert_eq!(resolve_filename("", ""), "_model.png");
    }

    #[test]
    fn resolution_is_deterministic() {
        let a = resolve_filename("Ultra Ball (model).png", "/u.png");
        let b = resolve_filename("Ultra Ball (model).png", "/u.png");
        assert_eq!(a, b);
    }

    #[test]
    fn collisions_get_an_index_suffix() {
        let mut used = HashSet::new();

        assert_eq!(unique_filename("_model.png", &mut used), "_model.png");
        assert_eq!(unique_filename("_model.png", &mut used), "_model_2.png");
        assert_eq!(unique_filename("_model.png", &mut used), "_model_3.png");
        assert_eq!(unique_filename("other.png", &mut used), "other.png");
    }
}

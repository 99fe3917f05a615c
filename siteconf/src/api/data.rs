use super::{
    emojis,
    icons::CategoryIconTable,
    identity::{PageMeta, SiteIdentity},
};

/// Category keys used to classify posts
pub mod category {
    pub const STUDY: &str = "STUDY";
    pub const ME: &str = "ME";
    pub const ALL: &str = "All";
}

pub static USER_INFORMATIONS: SiteIdentity = SiteIdentity {
    header_title: "dglee",
    user_name: "이도건",
    mascot: emojis::PANDA,
    resume: "",
    github: "https://github.com/ldg6282",
    domain: "https://www.dglee.site",
    meta: PageMeta {
        title: "dglee 개발블로그",
        description: "안녕하세요 프론트엔드 개발자 이도건입니다:)",
    },
};

pub static CATEGORY_ICONS: CategoryIconTable = CategoryIconTable::new(&[
    (category::STUDY, emojis::BOOKS),
    (category::ME, emojis::CLOVER),
    (category::ALL, emojis::HOUSE),
]);

#[cfg(test)]
mod tests {
    use std::thread;

    use serde_json::Value;

    use super::*;

    fn assert_all_leaves_are_strings(value: &Value, path: &str) {
        match value {
            Value::String(_) => {}
            Value::Object(map) => {
                for (key, child) in map {
                    assert_all_leaves_are_strings(child, &format!("{path}.{key}"));
                }
            }
            other => panic!("{path} is not a string: {other:?}"),
        }
    }

    #[test]
    fn test_user_informations_fields_are_strings() {
        let value = serde_json::to_value(USER_INFORMATIONS).expect("Failed to serialize");
        let object = value.as_object().expect("identity should be an object");

        assert_eq!(object.len(), 7);
        assert_eq!(value["meta"].as_object().map(|meta| meta.len()), Some(2));
        assert_all_leaves_are_strings(&value, "USER_INFORMATIONS");
        assert_eq!(value["meta"]["title"], "dglee 개발블로그");
        assert_eq!(
            value["meta"]["description"],
            "안녕하세요 프론트엔드 개발자 이도건입니다:)"
        );
    }

    #[test]
    fn test_resume_is_empty_string_not_absent() {
        assert_eq!(USER_INFORMATIONS.resume, "");
        assert_eq!(USER_INFORMATIONS.resume_link(), None);

        let value = serde_json::to_value(USER_INFORMATIONS).expect("Failed to serialize");
        assert_eq!(value.get("resume"), Some(&Value::String(String::new())));

        let yaml = serde_yaml::to_string(&USER_INFORMATIONS).expect("Failed to serialize to YAML");
        let parsed: serde_yaml::Value =
            serde_yaml::from_str(&yaml).expect("Failed to parse YAML back");
        assert_eq!(parsed["resume"].as_str(), Some(""));
    }

    #[test]
    fn test_user_informations_values() {
        assert_eq!(USER_INFORMATIONS.header_title, "dglee");
        assert_eq!(USER_INFORMATIONS.user_name, "이도건");
        assert_eq!(USER_INFORMATIONS.mascot, "🐼");
        assert_eq!(USER_INFORMATIONS.github, "https://github.com/ldg6282");
        assert_eq!(USER_INFORMATIONS.domain, "https://www.dglee.site");
    }

    #[test]
    fn test_mascot_is_single_glyph() {
        assert_eq!(USER_INFORMATIONS.mascot.chars().count(), 1);
    }

    #[test]
    fn test_category_icons_lookup() {
        assert_eq!(CATEGORY_ICONS.get("STUDY"), Some("📚"));
        assert_eq!(CATEGORY_ICONS.get("ME"), Some("🍀"));
        assert_eq!(CATEGORY_ICONS.get("All"), Some("🏠"));
    }

    #[test]
    fn test_category_icons_unknown_key_is_absent() {
        assert_eq!(CATEGORY_ICONS.get("unknown"), None);
        // "All" is the only mixed-case key
        assert_eq!(CATEGORY_ICONS.get("ALL"), None);
    }

    #[test]
    fn test_category_icons_exact_key_set() {
        let mut keys: Vec<_> = CATEGORY_ICONS.keys().collect();
        keys.sort();
        assert_eq!(keys, vec!["All", "ME", "STUDY"]);

        for (key, icon) in CATEGORY_ICONS.iter() {
            assert_eq!(icon.chars().count(), 1, "icon for {key} is not one glyph");
        }
    }

    #[test]
    fn test_reads_are_stable() {
        let first = (USER_INFORMATIONS, CATEGORY_ICONS);
        let second = (USER_INFORMATIONS, CATEGORY_ICONS);
        assert_eq!(first, second);
    }

    #[test]
    fn test_concurrent_reads_see_same_values() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                thread::spawn(|| {
                    (
                        USER_INFORMATIONS.user_name,
                        CATEGORY_ICONS.get(category::STUDY),
                    )
                })
            })
            .collect();

        for handle in handles {
            let (user_name, study) = handle.join().expect("reader thread panicked");
            assert_eq!(user_name, "이도건");
            assert_eq!(study, Some(emojis::BOOKS));
        }
    }
}

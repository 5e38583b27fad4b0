use voxbridge::domain::Language;

#[test]
fn given_accepted_tags_when_resolved_then_returns_documented_pairs() {
    let cases = [
        ("en-us", "a", "af_heart"),
        ("en-gb", "b", "bf_emma"),
        ("es", "e", "ef_dora"),
        ("pt-br", "p", "pf_dora"),
    ];

    for (tag, lang_code, voice) in cases {
        let language = Language::from_tag(tag).expect("tag should be accepted");
        let profile = language.voice_profile();
        assert_eq!(profile.lang_code, lang_code, "lang code for {}", tag);
        assert_eq!(profile.voice, voice, "voice for {}", tag);
        assert_eq!(language.as_tag(), tag);
    }
}

#[test]
fn given_mixed_case_tags_when_resolved_then_matches_lowercase_mapping() {
    for tag in ["EN-US", "En-Gb", "ES", "Pt-Br", "eN-uS"] {
        let language = Language::from_tag(tag).expect("case variants should be accepted");
        let canonical = Language::from_tag(&tag.to_lowercase()).unwrap();
        assert_eq!(language, canonical, "{} should match its lowercase form", tag);
    }
}

#[test]
fn given_unknown_tags_when_resolved_then_rejected() {
    for tag in ["fr", "de", "", "en_us", "en-us ", "english", "pt"] {
        let err = Language::from_tag(tag).expect_err("tag should be rejected");
        assert_eq!(err.tag, tag);
    }
}

#[test]
fn given_rejection_error_then_message_enumerates_accepted_tags() {
    let err = Language::from_tag("fr").unwrap_err();
    let message = err.to_string();
    for tag in Language::ACCEPTED_TAGS {
        assert!(message.contains(tag), "message should list {}", tag);
    }
}

use lrc_booklet::language::{detect, Language};

#[test]
fn test_detect_kana() {
    assert_eq!(detect("ひらがな"), Some(Language::Japanese));
    assert_eq!(detect("カタカナ"), Some(Language::Japanese));
}

#[test]
fn test_detect_kana_before_ideograph() {
    // 日文歌词夹着中文译文
    let content = "[00:01.00]夜に駆ける\n[00:01.00]向夜晚奔去\n[00:01.00]yoru ni kakeru\n";
    assert_eq!(detect(content), Some(Language::Japanese));
}

#[test]
fn test_detect_ideograph() {
    assert_eq!(detect("[00:01.00]你问我爱你有多深"), Some(Language::Chinese));
    assert_eq!(detect("漢字 and latin"), Some(Language::Chinese));
}

#[test]
fn test_detect_latin() {
    assert_eq!(detect("[00:01.00]Yesterday"), Some(Language::English));
}

#[test]
fn test_detect_none() {
    assert_eq!(detect(""), None);
    assert_eq!(detect("[00:01.00] 123 ... !?"), None);
    assert_eq!(detect("한국어"), None);
}

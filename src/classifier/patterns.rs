// file: src/classifier/patterns.rs
// description: compiled vendor grammars and fixed verdict vocabularies
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

/// Heuristic categories in declaration order. A plurality tie goes to the
/// category listed first.
pub const AV_HEURISTICS: &[&str] = &[
    "trojan",
    "adware",
    "dropper",
    "miner",
    "backdoor",
    "malware",
    "downloader",
    "rat",
    "hacktool",
    "ransomware",
    "cryptolocker",
    "banker",
    "financial",
    "eicar",
    "scanner",
];

/// Adware products and monetization techniques that always yield `adware`.
pub const ADWARE_OVERRIDES: &[&str] = &["opencandy", "monetize", "adload", "somoto"];

pub const MICROSOFT_ENGINE: &str = "Microsoft";
pub const KASPERSKY_ENGINE: &str = "Kaspersky";

lazy_static! {
    // <category>:<platform>/<name>[!.]<suffix>, e.g. Trojan:Win32/Occamy.C
    pub static ref MICROSOFT_VERDICT: Regex = Regex::new(
        r"^(.*?):(.*?)/(?:([^!.]+))?(?:[!.](\w+))?"
    ).expect("MICROSOFT_VERDICT regex is valid");

    // [<prefix>:]<type>.<platform>.<name>[.<variant>], e.g. HEUR:Trojan.Win32.Generic
    pub static ref KASPERSKY_VERDICT: Regex = Regex::new(
        r"^((.+?):)?(.+?)\.(.+?)\.([^.]+)(\.(.+))?"
    ).expect("KASPERSKY_VERDICT regex is valid");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_microsoft_pattern() {
        let caps = MICROSOFT_VERDICT.captures("Trojan:Win32/Occamy.C").unwrap();
        assert_eq!(&caps[1], "Trojan");
        assert_eq!(&caps[2], "Win32");
        assert_eq!(&caps[3], "Occamy");
        assert_eq!(&caps[4], "C");

        let caps = MICROSOFT_VERDICT.captures("Trojan:Win32/Wacatac.B!ml").unwrap();
        assert_eq!(&caps[3], "Wacatac");

        assert!(!MICROSOFT_VERDICT.is_match("Trojan.Win32.Occamy"));
    }

    #[test]
    fn test_kaspersky_pattern() {
        let caps = KASPERSKY_VERDICT.captures("HEUR:Trojan.Win32.Generic").unwrap();
        assert_eq!(&caps[2], "HEUR");
        assert_eq!(&caps[3], "Trojan");
        assert_eq!(&caps[4], "Win32");
        assert_eq!(&caps[5], "Generic");

        let caps = KASPERSKY_VERDICT.captures("Trojan.Win32.Occamy.gen").unwrap();
        assert!(caps.get(1).is_none());
        assert_eq!(&caps[5], "Occamy");
        assert_eq!(&caps[7], "gen");

        assert!(!KASPERSKY_VERDICT.is_match("Trojan.Win32"));
    }

    #[test]
    fn test_vocabularies_are_lowercase() {
        for term in AV_HEURISTICS.iter().chain(ADWARE_OVERRIDES) {
            assert_eq!(*term, term.to_lowercase());
        }
    }
}

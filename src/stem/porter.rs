//! Porter stemming algorithm implementation.
//!
//! This module implements the classic Porter stemming algorithm for
//! reducing English words to their stems, following the reference rule
//! list exactly (including its two departures from the 1980 paper,
//! `bli` → `ble` and `logi` → `log`, and the early return for words of
//! one or two letters).
//!
//! # Algorithm
//!
//! The stemmer applies five sequential rule steps to a working buffer:
//! 1. Plurals and the -eed/-ed/-ing endings, then terminal -y → -i
//! 2. Double suffixes: -ational → -ate, -ization → -ize, etc.
//! 3. -icate → -ic, -ative → "", -ness → "", etc.
//! 4. Removal of -ance, -ement, -ion, -ous, etc.
//! 5. Final -e and doubled -ll cleanup
//!
//! Most rules are gated on the *measure* of the remaining stem, the `m`
//! of the vowel/consonant pattern `[C](VC){m}[V]`, so that short words
//! such as "feed" or "sing" are left alone.
//!
//! # Input policy
//!
//! Input is ASCII-lowercased before stemming, so the result is a prefix
//! of the lowercased word. ASCII bytes outside `a`-`z` are classified as
//! consonants and match no suffix rule, so words carrying digits or
//! punctuation come back largely unchanged. Non-ASCII input is returned
//! as-is; use [`Stemmer::try_stem`] to reject it instead.
//!
//! # Examples
//!
//! ```
//! use rootstock::stem::Stemmer;
//! use rootstock::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("caresses"), "caress");
//! assert_eq!(stemmer.stem("troubleshooting"), "troubleshoot");
//! assert_eq!(stemmer.stem("traditional"), "tradit");
//! ```

use crate::stem::Stemmer;

/// Step 2 suffix rewrites, in reference rule-list order. Longer suffixes
/// precede the shorter suffixes they contain, so the first match is the
/// longest applicable one.
const STEP2_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("bli", "ble"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("logi", "log"),
];

/// Step 3 suffix rewrites, in reference rule-list order.
const STEP3_RULES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

/// Step 4 suffixes removed outright, in reference rule-list order.
/// `ion` is special-cased: it only goes when preceded by `s` or `t`.
const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Porter stemming algorithm implementation.
///
/// The stemmer holds no state; every call to [`stem`](Stemmer::stem) owns
/// its own working buffer, so a single instance can be shared freely
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        if !word.is_ascii() {
            return word.to_string();
        }

        let word = word.to_ascii_lowercase();
        // Words of one or two letters are left alone, as in the reference
        // implementation.
        if word.len() <= 2 {
            return word;
        }

        let mut buffer = StemBuffer::new(&word);
        buffer.step1ab();
        buffer.step1c();
        buffer.step2();
        buffer.step3();
        buffer.step4();
        buffer.step5();
        buffer.into_stem()
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}

/// Working state for a single stemming call.
///
/// Owns the word's bytes together with the live length `len` (the word is
/// `b[0..len]`) and the stem boundary `stem` set by the latest successful
/// suffix match (the candidate stem is `b[0..stem]`). The vector is never
/// reallocated: the only rules that lengthen the word (step 1b's restored
/// trailing `e`) write into slots vacated earlier in the same call, so
/// `len` never exceeds the input length.
struct StemBuffer {
    b: Vec<u8>,
    len: usize,
    stem: usize,
}

impl StemBuffer {
    fn new(word: &str) -> StemBuffer {
        StemBuffer {
            b: word.as_bytes().to_vec(),
            len: word.len(),
            stem: 0,
        }
    }

    /// Consume the buffer, returning the surviving prefix as a `String`.
    fn into_stem(mut self) -> String {
        self.b.truncate(self.len);
        // The buffer only ever holds ASCII bytes, so this never replaces
        // anything.
        String::from_utf8_lossy(&self.b).into_owned()
    }

    /// `true` if the byte at `i` is a consonant.
    ///
    /// `y` is a consonant at position 0 and after a vowel; after a
    /// consonant it counts as a vowel ("syzygy", "happy"). Every byte
    /// other than the five vowels and `y` is a consonant, including
    /// non-letter bytes.
    fn is_consonant(&self, i: usize) -> bool {
        match self.b[i] {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => i == 0 || !self.is_consonant(i - 1),
            _ => true,
        }
    }

    /// The measure of the candidate stem: the `m` of its vowel/consonant
    /// pattern `[C](VC){m}[V]`, counted over `b[0..stem]`.
    fn measure(&self) -> usize {
        let mut n = 0;
        let mut i = 0;

        // Skip the optional leading consonant run.
        while i < self.stem && self.is_consonant(i) {
            i += 1;
        }

        loop {
            while i < self.stem && !self.is_consonant(i) {
                i += 1;
            }
            if i == self.stem {
                return n;
            }
            // A consonant following a vowel run closes one VC group.
            n += 1;
            while i < self.stem && self.is_consonant(i) {
                i += 1;
            }
            if i == self.stem {
                return n;
            }
        }
    }

    /// `true` if the candidate stem `b[0..stem]` contains a vowel.
    fn vowel_in_stem(&self) -> bool {
        (0..self.stem).any(|i| !self.is_consonant(i))
    }

    /// `true` if `b[i - 1]` and `b[i]` are the same consonant.
    fn double_consonant(&self, i: usize) -> bool {
        i >= 1 && self.b[i] == self.b[i - 1] && self.is_consonant(i)
    }

    /// `true` for a consonant-vowel-consonant pattern ending at `i` whose
    /// final consonant is not `w`, `x` or `y`. Marks short stems such as
    /// "hop" where a trailing `e` is kept or restored ("hoping" → "hope"),
    /// while excluding the likes of "snow" and "box".
    fn cvc(&self, i: usize) -> bool {
        if i < 2
            || !self.is_consonant(i)
            || self.is_consonant(i - 1)
            || !self.is_consonant(i - 2)
        {
            return false;
        }
        !matches!(self.b[i], b'w' | b'x' | b'y')
    }

    /// `true` if the live word ends with `s`; on success the stem boundary
    /// is moved to just before the suffix.
    fn ends(&mut self, s: &str) -> bool {
        let s = s.as_bytes();
        if s.len() > self.len {
            return false;
        }
        if &self.b[self.len - s.len()..self.len] == s {
            self.stem = self.len - s.len();
            true
        } else {
            false
        }
    }

    /// Overwrite everything past the stem boundary with `s`.
    fn set_to(&mut self, s: &str) {
        let s = s.as_bytes();
        self.b[self.stem..self.stem + s.len()].copy_from_slice(s);
        self.len = self.stem + s.len();
    }

    /// [`set_to`](StemBuffer::set_to) gated on `measure() > 0`.
    fn replace(&mut self, s: &str) {
        if self.measure() > 0 {
            self.set_to(s);
        }
    }

    /// Step 1a and 1b: plural endings, then -eed/-ed/-ing.
    ///
    /// When -ed or -ing comes off, the cleanup chain restores a trailing
    /// `e` after -at/-bl/-iz ("conflat" → "conflate"), undoes consonant
    /// doubling other than -ll/-ss/-zz ("hopp" → "hop"), or restores `e`
    /// on a short CVC stem ("fil" → "file").
    fn step1ab(&mut self) {
        if self.b[self.len - 1] == b's' {
            if self.ends("sses") {
                self.len -= 2;
            } else if self.ends("ies") {
                self.set_to("i");
            } else if self.b[self.len - 2] != b's' {
                self.len -= 1;
            }
        }

        if self.ends("eed") {
            if self.measure() > 0 {
                self.len -= 1;
            }
        } else if (self.ends("ed") || self.ends("ing")) && self.vowel_in_stem() {
            self.len = self.stem;
            if self.ends("at") {
                self.set_to("ate");
            } else if self.ends("bl") {
                self.set_to("ble");
            } else if self.ends("iz") {
                self.set_to("ize");
            } else if self.double_consonant(self.len - 1) {
                self.len -= 1;
                if matches!(self.b[self.len - 1], b'l' | b's' | b'z') {
                    self.len += 1;
                }
            } else if self.measure() == 1 && self.cvc(self.len - 1) {
                self.set_to("e");
            }
        }
    }

    /// Step 1c: terminal `y` becomes `i` when the stem holds a vowel
    /// ("happy" → "happi", but "sky" stays).
    fn step1c(&mut self) {
        if self.ends("y") && self.vowel_in_stem() {
            self.b[self.len - 1] = b'i';
        }
    }

    /// Step 2: map double suffixes to single ones. The first matching
    /// entry ends the step even when the measure gate blocks the rewrite.
    fn step2(&mut self) {
        for &(suffix, to) in STEP2_RULES {
            if self.ends(suffix) {
                self.replace(to);
                return;
            }
        }
    }

    /// Step 3: deal with -ic-, -ful, -ness and the like.
    fn step3(&mut self) {
        for &(suffix, to) in STEP3_RULES {
            if self.ends(suffix) {
                self.replace(to);
                return;
            }
        }
    }

    /// Step 4: take off remaining suffixes when the stem measures > 1.
    fn step4(&mut self) {
        for &suffix in STEP4_SUFFIXES {
            if self.ends(suffix) {
                if suffix == "ion"
                    && !(self.stem > 0 && matches!(self.b[self.stem - 1], b's' | b't'))
                {
                    return;
                }
                if self.measure() > 1 {
                    self.len = self.stem;
                }
                return;
            }
        }
    }

    /// Step 5: drop a final `e` unless it protects a short CVC stem, and
    /// reduce a final doubled `l` on longer words ("controll" → "control").
    fn step5(&mut self) {
        self.stem = self.len;
        if self.b[self.len - 1] == b'e' {
            let m = self.measure();
            if m > 1 || (m == 1 && !(self.len >= 2 && self.cvc(self.len - 2))) {
                self.len -= 1;
            }
        }
        if self.b[self.len - 1] == b'l' && self.double_consonant(self.len - 1) && self.measure() > 1
        {
            self.len -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_porter_stemmer() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("flies"), "fli");
        assert_eq!(stemmer.stem("died"), "di");
        assert_eq!(stemmer.stem("agreed"), "agre");
        assert_eq!(stemmer.stem("disabled"), "disabl");
        assert_eq!(stemmer.stem("measuring"), "measur");
        assert_eq!(stemmer.stem("itemization"), "item");
        assert_eq!(stemmer.stem("sensational"), "sensat");
        assert_eq!(stemmer.stem("traditional"), "tradit");
    }

    #[test]
    fn test_porter_plurals() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("caresses"), "caress");
        assert_eq!(stemmer.stem("ponies"), "poni");
        assert_eq!(stemmer.stem("ties"), "ti");
        assert_eq!(stemmer.stem("caress"), "caress");
        assert_eq!(stemmer.stem("cats"), "cat");
    }

    #[test]
    fn test_porter_measure_gates() {
        let stemmer = PorterStemmer::new();

        // measure("f") == 0 blocks the eed -> ee rewrite
        assert_eq!(stemmer.stem("feed"), "feed");
        // no vowel before the suffix blocks ed/ing removal
        assert_eq!(stemmer.stem("bled"), "bled");
        assert_eq!(stemmer.stem("sing"), "sing");
    }

    #[test]
    fn test_porter_step1b_cleanup() {
        let stemmer = PorterStemmer::new();

        // at/bl/iz restore the e
        assert_eq!(stemmer.stem("conflated"), "conflat");
        assert_eq!(stemmer.stem("sized"), "size");
        // doubled consonants collapse unless l, s or z
        assert_eq!(stemmer.stem("hopping"), "hop");
        assert_eq!(stemmer.stem("tanned"), "tan");
        assert_eq!(stemmer.stem("falling"), "fall");
        assert_eq!(stemmer.stem("hissing"), "hiss");
        assert_eq!(stemmer.stem("fizzed"), "fizz");
        // short CVC stems get their e back
        assert_eq!(stemmer.stem("filing"), "file");
        assert_eq!(stemmer.stem("failing"), "fail");
    }

    #[test]
    fn test_porter_step1c() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("happy"), "happi");
        assert_eq!(stemmer.stem("sky"), "sky");
    }

    #[test]
    fn test_porter_multi_step_reduction() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("relational"), "relat");
        assert_eq!(stemmer.stem("conditional"), "condit");
        assert_eq!(stemmer.stem("rational"), "ration");
        assert_eq!(stemmer.stem("troubleshooting"), "troubleshoot");
    }

    #[test]
    fn test_porter_short_words_unchanged() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem(""), "");
        assert_eq!(stemmer.stem("a"), "a");
        assert_eq!(stemmer.stem("is"), "is");
        assert_eq!(stemmer.stem("by"), "by");
    }

    #[test]
    fn test_porter_input_policy() {
        let stemmer = PorterStemmer::new();

        // mixed case is lowercased first
        assert_eq!(stemmer.stem("Running"), "run");
        assert_eq!(stemmer.stem("CARESSES"), "caress");
        // non-ASCII input passes through untouched
        assert_eq!(stemmer.stem("café"), "café");
        // non-letter bytes act as consonants and match no rule
        assert_eq!(stemmer.stem("x86"), "x86");
    }

    #[test]
    fn test_porter_never_grows() {
        let stemmer = PorterStemmer::new();

        for word in [
            "caresses",
            "ponies",
            "conflated",
            "hoping",
            "troubleshooting",
            "sensational",
            "sky",
            "e",
            "",
        ] {
            assert!(stemmer.stem(word).len() <= word.len(), "grew: {word}");
        }
    }

    #[test]
    fn test_porter_restemming_known_cases() {
        let stemmer = PorterStemmer::new();

        // the algorithm is not idempotent in general; pin the known cases
        assert_eq!(stemmer.stem("relate"), "relat");
        assert_eq!(stemmer.stem(&stemmer.stem("relational")), "relat");
        assert_eq!(stemmer.stem(&stemmer.stem("hoping")), "hope");
    }

    #[test]
    fn test_measure() {
        for (word, expected) in [
            ("tree", 0),
            ("trees", 1),
            ("trouble", 1),
            ("troubles", 2),
            ("oaten", 2),
            ("y", 0),
            ("", 0),
        ] {
            let mut buffer = StemBuffer::new(word);
            buffer.stem = buffer.len;
            assert_eq!(buffer.measure(), expected, "measure({word:?})");
        }
    }

    #[test]
    fn test_consonant_classification() {
        let buffer = StemBuffer::new("trouble");

        assert!(buffer.is_consonant(0)); // t
        assert!(buffer.is_consonant(1)); // r
        assert!(!buffer.is_consonant(2)); // o
        assert!(!buffer.is_consonant(3)); // u
        assert!(buffer.is_consonant(4)); // b
        assert!(buffer.is_consonant(5)); // l
        assert!(!buffer.is_consonant(6)); // e

        // y after a consonant is a vowel, after a vowel a consonant
        let buffer = StemBuffer::new("boyhood");
        assert!(buffer.is_consonant(2));
        let buffer = StemBuffer::new("happy");
        assert!(!buffer.is_consonant(4));
        let buffer = StemBuffer::new("yes");
        assert!(buffer.is_consonant(0));
    }

    #[test]
    fn test_cvc_predicate() {
        let buffer = StemBuffer::new("fil");
        assert!(buffer.cvc(2));

        // final w, x and y are excluded
        let buffer = StemBuffer::new("snow");
        assert!(!buffer.cvc(3));
        let buffer = StemBuffer::new("box");
        assert!(!buffer.cvc(2));

        // too short, or pattern mismatch
        let buffer = StemBuffer::new("at");
        assert!(!buffer.cvc(1));
        let buffer = StemBuffer::new("fail");
        assert!(!buffer.cvc(3));
    }

    #[test]
    fn test_double_consonant_predicate() {
        let buffer = StemBuffer::new("hopp");
        assert!(buffer.double_consonant(3));

        let buffer = StemBuffer::new("hop");
        assert!(!buffer.double_consonant(2));

        // a doubled vowel is not a double consonant
        let buffer = StemBuffer::new("tree");
        assert!(!buffer.double_consonant(3));
    }

    #[test]
    fn test_porter_name() {
        assert_eq!(PorterStemmer::new().name(), "porter");
    }
}

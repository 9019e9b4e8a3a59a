use bionic::engine::boundary::ratio_len;
use bionic::engine::{
    best_cut, classify, reconstruct, AnnotationConfig, ScriptClass, SegmentError, Segmenter,
    TextAnnotator,
};
use proptest::prelude::*;

struct CharSegmenter;

impl Segmenter for CharSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>, SegmentError> {
        Ok(text.chars().map(String::from).collect())
    }
}

/// Two-character words, the way a dictionary segmenter usually splits.
struct PairSegmenter;

impl Segmenter for PairSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>, SegmentError> {
        let chars: Vec<char> = text.chars().collect();
        Ok(chars.chunks(2).map(|pair| pair.iter().collect()).collect())
    }
}

proptest! {
    #[test]
    fn annotation_is_lossless(
        s in "[a-zA-Z0-9 ,.!\n你好世界学习中文的了]{0,80}",
        ratio in 0.2f64..=0.8,
        ignore_short in any::<bool>(),
    ) {
        let config = AnnotationConfig::new(ratio, ignore_short).unwrap();
        for annotator in [TextAnnotator::new(CharSegmenter), TextAnnotator::new(PairSegmenter)] {
            let spans = annotator.annotate(&s, &config);
            prop_assert_eq!(reconstruct(&spans), s.clone());
        }
    }

    #[test]
    fn jieba_annotation_is_lossless(s in "[a-z 你好世界学习中文的了我们]{0,40}") {
        let spans = bionic::annotate(&s, &AnnotationConfig::default());
        prop_assert_eq!(reconstruct(&spans), s);
    }

    #[test]
    fn latin_cut_stays_inside_word(word in "[a-zA-Z]{2,16}", ratio in 0.2f64..=0.8) {
        let cut = best_cut(&word, ratio);
        prop_assert!(cut >= 1);
        prop_assert!(cut < word.chars().count());
    }

    #[test]
    fn digit_cut_follows_ratio(digits in "[0-9]{1,12}", ratio in 0.2f64..=0.8) {
        prop_assert_eq!(best_cut(&digits, ratio), ratio_len(digits.len(), ratio));
    }

    #[test]
    fn short_words_unmarked_when_ignored(word in "[a-z]{1,3}", ratio in 0.2f64..=0.8) {
        let config = AnnotationConfig::new(ratio, true).unwrap();
        let spans = TextAnnotator::new(CharSegmenter).annotate(&word, &config);
        prop_assert_eq!(spans.len(), 1);
        prop_assert!(!spans[0].marked);
    }

    #[test]
    fn single_character_chinese_words_unmarked_when_ignored(s in "[你好世界学习]{1,12}") {
        let config = AnnotationConfig::new(0.5, true).unwrap();
        let spans = TextAnnotator::new(CharSegmenter).annotate(&s, &config);
        prop_assert!(spans.iter().all(|span| !span.marked));
    }

    #[test]
    fn classify_covers_input_and_merges_runs(s in "[a-z0-9 ,你好世界]{0,60}") {
        let tokens = classify(&s);
        let joined: String = tokens.iter().map(|t| t.text).collect();
        prop_assert_eq!(&joined, &s);
        prop_assert_eq!(classify(&joined), tokens.clone());
        for pair in tokens.windows(2) {
            if pair[0].class != ScriptClass::Other {
                prop_assert_ne!(pair[0].class, pair[1].class);
            }
        }
    }
}

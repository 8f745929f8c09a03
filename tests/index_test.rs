//! Integration tests for inverted indexes, posting merging and suffix arrays

use std::sync::Arc;

use irkit::analysis::normalizer::LowercaseNormalizer;
use irkit::analysis::tokenizer::{RegexTokenizer, UnicodeWordTokenizer};
use irkit::index::{AccessLoggedIndex, FrequencyOnlyIndex};
use irkit::prelude::*;

fn analyzer() -> Analyzer {
    Analyzer::new(
        Arc::new(RegexTokenizer::new().unwrap()),
        Arc::new(LowercaseNormalizer::new()),
    )
}

fn corpus() -> Result<InMemoryCorpus> {
    InMemoryCorpus::from_documents(vec![
        Document::builder(0)
            .add_text("title", "Eple")
            .add_text("body", "Eple og drue. Eple igjen.")
            .build(),
        Document::builder(1)
            .add_text("title", "Banan")
            .add_text("body", "banan, drue og appelsin")
            .build(),
        Document::builder(2)
            .add_text("title", "Drue")
            .add_text("body", "bare drue")
            .build(),
        Document::builder(3)
            .add_text("title", "Blanding")
            .add_text("body", "eple, banan og drue")
            .build(),
    ])
}

fn ids(postings: impl Iterator<Item = Posting>) -> Vec<u32> {
    postings.map(|p| p.document_id).collect()
}

#[test]
fn test_index_and_boolean_merging() -> Result<()> {
    let corpus = corpus()?;
    for compressed in [false, true] {
        let index = InMemoryInvertedIndex::new(
            &corpus,
            &["title", "body"],
            analyzer(),
            InvertedIndexConfig { compressed },
        )?;

        assert_eq!(ids(index.get_postings_iterator("eple")), vec![0, 3]);
        assert_eq!(index.get_collection_frequency("eple"), 4);
        assert_eq!(index.get_document_frequency("drue"), 4);

        let and = PostingsMerger::intersection(
            index.get_postings_iterator("eple"),
            index.get_postings_iterator("banan"),
        );
        assert_eq!(ids(and), vec![3]);

        let or = PostingsMerger::union(
            index.get_postings_iterator("eple"),
            index.get_postings_iterator("appelsin"),
        );
        assert_eq!(ids(or), vec![0, 1, 3]);

        let and_not = PostingsMerger::difference(
            index.get_postings_iterator("drue"),
            index.get_postings_iterator("banan"),
        );
        assert_eq!(ids(and_not), vec![0, 2]);

        // (drue AND og) ANDNOT eple
        let nested = PostingsMerger::difference(
            PostingsMerger::intersection(
                index.get_postings_iterator("drue"),
                index.get_postings_iterator("og"),
            ),
            index.get_postings_iterator("eple"),
        );
        assert_eq!(ids(nested), vec![1]);

        let unknown = PostingsMerger::union(
            index.get_postings_iterator("kiwi"),
            index.get_postings_iterator("mango"),
        );
        assert!(ids(unknown).is_empty());
    }
    Ok(())
}

#[test]
fn test_query_terms_come_from_index_analysis() -> Result<()> {
    let index = InMemoryInvertedIndex::new(
        &corpus()?,
        &["body"],
        analyzer(),
        InvertedIndexConfig::default(),
    )?;

    let terms = index.get_terms("EPLE og Kiwi")?;
    assert_eq!(terms, vec!["eple", "og", "kiwi"]);
    let present: Vec<&str> = terms
        .iter()
        .map(String::as_str)
        .filter(|term| index.contains(term))
        .collect();
    assert_eq!(present, vec!["eple", "og"]);
    Ok(())
}

#[test]
fn test_frequency_only_matches_full_index() -> Result<()> {
    let corpus = corpus()?;
    let full = InMemoryInvertedIndex::new(
        &corpus,
        &["title", "body"],
        analyzer(),
        InvertedIndexConfig::default(),
    )?;
    let counts = FrequencyOnlyIndex::new(&corpus, &["title", "body"], analyzer())?;

    let mut full_terms: Vec<&str> = full.get_indexed_terms().collect();
    let mut count_terms: Vec<&str> = counts.get_indexed_terms().collect();
    full_terms.sort();
    count_terms.sort();
    assert_eq!(full_terms, count_terms);

    for term in full_terms {
        assert_eq!(
            full.get_document_frequency(term),
            counts.get_document_frequency(term),
            "document frequency of {term:?}"
        );
    }
    Ok(())
}

#[test]
fn test_intersection_reads_postings_lazily() -> Result<()> {
    let corpus = InMemoryCorpus::from_texts([
        "sjelden ofte",
        "ofte",
        "ofte",
        "ofte",
        "ofte",
        "ofte",
    ]);
    let index = AccessLoggedIndex::new(InMemoryInvertedIndex::new(
        &corpus,
        &["body"],
        analyzer(),
        InvertedIndexConfig::default(),
    )?);

    let mut and = PostingsMerger::intersection(
        index.get_postings_iterator("sjelden"),
        index.get_postings_iterator("ofte"),
    );
    assert_eq!(and.next().map(|p| p.document_id), Some(0));
    assert_eq!(
        index.history(),
        vec![("sjelden".to_string(), 0), ("ofte".to_string(), 0)]
    );
    Ok(())
}

#[test]
fn test_suffix_array_search() -> Result<()> {
    let corpus: Arc<dyn Corpus> = Arc::new(InMemoryCorpus::from_texts([
        "Suffix arrays are space efficient",
        "An array of suffixes, a suffix array",
        "Nothing to see here",
        "suffix suffix suffix",
    ]));
    let engine = SuffixArray::new(corpus, &["body"], analyzer())?;

    let hits = engine.evaluate("SUFFIX", &SearchOptions::default())?;
    let ranked: Vec<(u32, usize)> = hits
        .iter()
        .map(|hit| (hit.document.document_id(), hit.score))
        .collect();
    // "suffixes" starts with "suffix" too.
    assert_eq!(ranked, vec![(3, 3), (1, 2), (0, 1)]);

    let hits = engine.evaluate("suffix arr", &SearchOptions { hit_count: 1 })?;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].document.document_id(), 0);
    assert_eq!(hits[0].document.get_field("body"), Some("Suffix arrays are space efficient"));

    assert!(engine.evaluate("uffix", &SearchOptions::default())?.is_empty());
    assert!(engine.evaluate("", &SearchOptions::default())?.is_empty());
    Ok(())
}

#[test]
fn test_suffix_array_with_unicode_words() -> Result<()> {
    let analyzer = Analyzer::new(
        Arc::new(UnicodeWordTokenizer::new()),
        Arc::new(LowercaseNormalizer::new()),
    );
    let corpus: Arc<dyn Corpus> = Arc::new(InMemoryCorpus::from_texts([
        "Blåbær og bringebær",
        "Ørret og blåbærsyltetøy",
    ]));
    let engine = SuffixArray::new(corpus, &["body"], analyzer)?;

    let ranked: Vec<u32> = engine
        .evaluate("BLÅBÆR", &SearchOptions::default())?
        .iter()
        .map(|hit| hit.document.document_id())
        .collect();
    assert_eq!(ranked, vec![0, 1]);

    let ranked: Vec<u32> = engine
        .evaluate("og b", &SearchOptions::default())?
        .iter()
        .map(|hit| hit.document.document_id())
        .collect();
    assert_eq!(ranked, vec![0, 1]);
    Ok(())
}

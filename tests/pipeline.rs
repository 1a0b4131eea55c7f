use huffman_visualizer::container::{read_container, write_container};
use huffman_visualizer::render::render_code_table;
use huffman_visualizer::stats::CompressionStats;
use huffman_visualizer::{
    analyze, build_code_table, build_huffman_tree, code_entries, decode, encode, Error, Huffman,
    MalformedEncoding,
};
use test_case::test_case;

#[test_case("aabbc" ; "known vector")]
#[test_case("aaaa" ; "one symbol")]
#[test_case("Grüße aus Köln - 🚲🚲🚲" ; "multibyte")]
#[test_case("0101 not bits 1010" ; "digits as text")]
fn full_pipeline_round_trips(text: &str) {
    let freqs = analyze(text);
    let tree = build_huffman_tree(&freqs).unwrap();
    let codes = build_code_table(&tree);
    let bits = encode(text, &codes).unwrap();

    assert!(codes.is_prefix_free());
    assert_eq!(decode(&bits, &build_huffman_tree(&freqs).unwrap()).unwrap(), text);
}

#[test]
fn degenerate_input_end_to_end() {
    let freqs = analyze("aaaa");
    assert_eq!(freqs.iter().collect::<Vec<_>>(), vec![('a', 4)]);

    let tree = build_huffman_tree(&freqs).unwrap();
    assert!(tree.is_leaf());

    let codes = build_code_table(&tree);
    assert_eq!(codes.pairs().collect::<Vec<_>>(), vec![('a', "0")]);
    assert_eq!(encode("aaaa", &codes).unwrap(), "0000");
    assert_eq!(decode("0000", &tree).unwrap(), "aaaa");
}

#[test]
fn container_carries_an_encoding_between_coders() {
    let text = "It was the best of times, it was the worst of times.";
    let (sender, bits) = Huffman::compress(text).unwrap();

    let mut wire = Vec::new();
    write_container(&mut wire, sender.freqs(), &bits).unwrap();

    let received = read_container(wire.as_slice()).unwrap();
    let receiver = Huffman::new(received.table).unwrap();
    assert_eq!(receiver.codes(), sender.codes());
    assert_eq!(receiver.decode(&received.bits).unwrap(), text);
}

#[test]
fn decoding_with_the_wrong_tree_is_detected_or_differs() {
    let (_, bits) = Huffman::compress("abcabcabd").unwrap();
    let (other, _) = Huffman::compress("zz").unwrap();

    match other.decode(&bits) {
        Err(Error::Malformed(MalformedEncoding::NoBranch { .. })) => {}
        Ok(text) => assert_ne!(text, "abcabcabd"),
        Err(e) => panic!("unexpected error {e}"),
    }
}

#[test]
fn listing_and_stats_agree_with_the_encoding() {
    let text = "mississippi";
    let (huffman, bits) = Huffman::compress(text).unwrap();
    let entries = code_entries(huffman.codes(), huffman.freqs());

    let weighted: u64 = entries
        .iter()
        .map(|e| e.code.len() as u64 * e.frequency)
        .sum();
    let stats = CompressionStats::measure(text, huffman.freqs(), &bits);
    assert_eq!(weighted, stats.encoded_bits);
    assert!(stats.encoded_bits <= stats.fixed_width_bits);

    let listing = render_code_table(&entries);
    assert_eq!(listing.lines().count(), entries.len() + 1);
}

#[test]
fn errors_read_well() {
    let (huffman, _) = Huffman::compress("ab").unwrap();
    let err = huffman.encode("abc").unwrap_err();
    assert_eq!(err.to_string(), "symbol 'c' at position 2 has no code");

    let err = huffman.decode("2").unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed encoding: unexpected character '2' at bit 0"
    );

    let err = build_huffman_tree(&analyze("")).unwrap_err();
    assert_eq!(err.to_string(), "cannot build a Huffman tree from empty input");
}

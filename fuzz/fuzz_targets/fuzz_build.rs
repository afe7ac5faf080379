#![no_main]

use libfuzzer_sys::fuzz_target;
use sufx::{BuildConfig, BuildError, SuffixTree, verify};

fuzz_target!(|data: &[u8]| {
    // Construction must either reject the input or yield a sound tree
    match SuffixTree::build_with(data.to_vec(), &BuildConfig::with_terminator(0u8)) {
        Ok(tree) => {
            assert_eq!(verify(&tree), Ok(()));
            assert_eq!(tree.leaf_count(), data.len() + 1);
        }
        Err(BuildError::EmptyText) => assert!(data.is_empty()),
        Err(BuildError::ReservedSymbol { position }) => assert_eq!(data[position], 0),
    }

    if let Ok(tree) = SuffixTree::build(data.to_vec()) {
        assert_eq!(verify(&tree), Ok(()));
    }
});

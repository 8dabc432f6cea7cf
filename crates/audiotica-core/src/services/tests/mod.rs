#[cfg(test)]
mod collection_tests;

//! lotto-bench: criterion benchmarks for lotto-core (see `benches/`).

#![no_main]

use arbitrary::Arbitrary;
use fgrid_core::{Dimensions, ItemStore};
use fgrid_layout::RowPacker;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct PackInput {
    raw: Vec<(f64, f64)>,
    container_width: f64,
    gutter: f64,
    row_height: f64,
    width_fudge: u32,
}

fuzz_target!(|input: PackInput| {
    if input.raw.len() > 4096 {
        return;
    }

    let store = ItemStore::build(
        input.raw.iter().map(|&(w, h)| Dimensions::new(w, h)),
        input.row_height,
    );
    let packer = RowPacker::new()
        .row_height(input.row_height)
        .gutter(input.gutter)
        .width_fudge(input.width_fudge);

    // pack must never panic; it either rejects the parameters or returns
    // a partition of the item sequence.
    let Ok(rows) = packer.pack(store.items(), input.container_width) else {
        return;
    };

    let mut next = 0_usize;
    for row in &rows {
        assert_eq!(row.range.start, next);
        assert!(row.range.end > row.range.start);
        assert_eq!(row.widths.len(), row.range.len());
        next = row.range.end;
    }
    assert_eq!(next, store.len());
});

//! Structured test fixtures, in the style `mos-6502/tests/instructions.rs`
//! uses `serde_json` for non-generated cases: a small hand-built JSON
//! array instead of a vendored single-step corpus (none exists for the
//! 8051 the way one does for 6502/Z80).

use intel_8051::EmulatorBuilder;
use serde::Deserialize;

#[derive(Deserialize)]
struct Case {
    name: String,
    pmem: Vec<u8>,
    expect_acc: u8,
}

const FIXTURES_JSON: &str = r#"
[
    {"name": "mov-a-imm", "pmem": [0x74, 0x2A], "expect_acc": 0x2A},
    {"name": "add-a-imm", "pmem": [0x74, 0x01, 0x24, 0x01], "expect_acc": 0x02},
    {"name": "cpl-a", "pmem": [0x74, 0x0F, 0xF4], "expect_acc": 0xF0},
    {"name": "swap-a", "pmem": [0x74, 0x1F, 0xC4], "expect_acc": 0xF1}
]
"#;

#[test]
fn accumulator_fixtures_match_expectations() {
    let cases: Vec<Case> = serde_json::from_str(FIXTURES_JSON).expect("fixtures parse");
    for case in cases {
        let mut pmem = case.pmem.clone();
        pmem.resize(1024, 0);
        let mut emu = EmulatorBuilder::new(pmem, vec![0u8; 128], vec![0u8; 128])
            .build()
            .unwrap();
        while (emu.pc() as usize) < case.pmem.len() {
            emu.step()
                .unwrap_or_else(|e| panic!("case {}: unexpected error {e}", case.name));
        }
        assert_eq!(
            emu.direct_read(0xE0),
            case.expect_acc,
            "case {} expected ACC = {:#04x}",
            case.name,
            case.expect_acc
        );
    }
}

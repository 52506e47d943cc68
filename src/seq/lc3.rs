//! The bundled LC-3 datapath macros.
//!
//! The data here is hand-transcribed from the annotated datapath diagram:
//! for each instruction, which control signals, selectors, wires, and shapes
//! are live during each clock cycle, plus the pseudocode shown next to the
//! diagram. Signal ids are the diagram's element names verbatim.
//!
//! The memory-access macros (LD, ST, TRAP and friends) spend extra cycles in
//! the memory subsystem; the scripts reflect the usual teaching simplification
//! of one cycle per MAR load, memory access, and writeback.

use crate::pseudocode::PseudocodeState;

use super::{MacroData, MacroTable, SignalId};

/// Builds the macro table for the LC-3 datapath: FETCH and DECODE, the
/// operate instructions (ADD, AND, NOT, each with register and immediate
/// variants where the ISA has them), the loads and stores, and the control
/// flow instructions.
pub fn lc3_macro_table() -> MacroTable {
    let mut table = MacroTable::new();
    table.insert("FETCH", entry("Fetch", Some(fetch_pseudocode()), FETCH_SEQ));
    table.insert("DECODE", entry("Decode", None, DECODE_SEQ));
    table.insert("ADD_REG", entry(
        "ADD (reg)",
        Some(alu_pseudocode("DR = SR1 + SR2;", "DR = SR1 + SEXT(imm5);", true)),
        ADD_REG_SEQ,
    ));
    table.insert("ADD_IMM", entry(
        "ADD (imm)",
        Some(alu_pseudocode("DR = SR1 + SR2;", "DR = SR1 + SEXT(imm5);", false)),
        ADD_IMM_SEQ,
    ));
    table.insert("AND_IMM", entry(
        "AND (imm)",
        Some(alu_pseudocode("DR = SR1 & SR2;", "DR = SR1 & SEXT(imm5);", false)),
        AND_IMM_SEQ,
    ));
    table.insert("AND_REG", entry(
        "AND (reg)",
        Some(alu_pseudocode("DR = SR1 & SR2;", "DR = SR1 & SEXT(imm5);", true)),
        AND_REG_SEQ,
    ));
    table.insert("NOT", entry("NOT", Some(not_pseudocode()), NOT_SEQ));
    table.insert("LD", entry("LD", Some(load_pseudocode("PC + SEXT(PCoffset9)")), LD_SEQ));
    table.insert("LDI", entry("LDI", Some(ldi_pseudocode()), LDI_SEQ));
    table.insert("LDR", entry("LDR", Some(load_pseudocode("BaseR + SEXT(offset6)")), LDR_SEQ));
    table.insert("ST", entry("ST", Some(store_pseudocode("PC + SEXT(PCoffset9)")), ST_SEQ));
    table.insert("STI", entry("STI", Some(sti_pseudocode()), STI_SEQ));
    table.insert("STR", entry("STR", Some(store_pseudocode("BaseR + SEXT(offset6)")), STR_SEQ));
    table.insert("LEA", entry("LEA", Some(lea_pseudocode()), LEA_SEQ));
    table.insert("BR", entry("BR (taken)", Some(br_pseudocode()), BR_SEQ));
    table.insert("JMP", entry("JMP", Some(jmp_pseudocode()), JMP_SEQ));
    table.insert("JSR", entry("JSR", Some(jsr_pseudocode()), JSR_SEQ));
    table.insert("JSRR", entry("JSRR", Some(jsrr_pseudocode()), JSRR_SEQ));
    table.insert("TRAP", entry("TRAP (simplified)", Some(trap_pseudocode()), TRAP_SEQ));
    table
}

fn entry(label: &str, pseudocode: Option<PseudocodeState>, cycles: &[&[&'static str]]) -> MacroData {
    MacroData {
        label: label.to_string(),
        pseudocode,
        sequence: cycles.iter()
            .map(|cycle| cycle.iter().copied().map(SignalId::from).collect())
            .collect(),
    }
}

fn fetch_pseudocode() -> PseudocodeState {
    PseudocodeState::builder()
        .span("IR = ", 2).span("mem[", 1).span("PC", 0).span("]", 1).span(";", 2)
        .newline()
        .span("PC = PC + 1;", 0)
        .build()
}

// Both arms of the bit[5] branch are shown; the one this variant does not
// take is marked disabled so it renders greyed out.
fn alu_pseudocode(reg_arm: &str, imm_arm: &str, reg_taken: bool) -> PseudocodeState {
    let b = PseudocodeState::builder().plain("if (bit[5] == 0)\n    ");
    let b = if reg_taken { b.span(reg_arm, 0) } else { b.disabled(reg_arm) };
    let b = b.plain("\nelse\n    ");
    let b = if reg_taken { b.disabled(imm_arm) } else { b.span(imm_arm, 0) };
    b.newline().span("setcc();", 0).build()
}

fn not_pseudocode() -> PseudocodeState {
    PseudocodeState::builder()
        .span("DR = NOT(SR);", 0)
        .newline()
        .span("setcc();", 0)
        .build()
}

fn load_pseudocode(addr: &str) -> PseudocodeState {
    PseudocodeState::builder()
        .span("DR = ", 2).span("mem[", 1).span(addr, 0).span("]", 1).span(";", 2)
        .newline()
        .span("setcc();", 2)
        .build()
}

fn ldi_pseudocode() -> PseudocodeState {
    PseudocodeState::builder()
        .span("DR = ", 4)
        .span("mem[", 3).span("mem[", 2).span("PC + SEXT(PCoffset9)", 0).span("]", 2).span("]", 3)
        .span(";", 4)
        .newline()
        .span("setcc();", 4)
        .build()
}

fn store_pseudocode(addr: &str) -> PseudocodeState {
    PseudocodeState::builder()
        .span("mem[", 2).span(addr, 0).span("] = ", 2).span("SR", 1).span(";", 2)
        .build()
}

fn sti_pseudocode() -> PseudocodeState {
    PseudocodeState::builder()
        .span("mem[", 4)
        .span("mem[", 2).span("PC + SEXT(PCoffset9)", 0).span("]", 2)
        .span("] = ", 4).span("SR", 3).span(";", 4)
        .build()
}

fn lea_pseudocode() -> PseudocodeState {
    PseudocodeState::builder()
        .span("DR = PC + SEXT(PCoffset9);", 0)
        .build()
}

fn br_pseudocode() -> PseudocodeState {
    PseudocodeState::builder()
        .plain("if ((n AND N) OR (z AND Z) OR (p AND P))\n    ")
        .span("PC = PC + SEXT(PCoffset9);", 0)
        .build()
}

fn jmp_pseudocode() -> PseudocodeState {
    PseudocodeState::builder()
        .span("PC = BaseR;", 0)
        .build()
}

fn jsr_pseudocode() -> PseudocodeState {
    PseudocodeState::builder()
        .span("[R7, PC] = [PC, PC + SEXT(PCOffset11)];", 0)
        .build()
}

fn jsrr_pseudocode() -> PseudocodeState {
    PseudocodeState::builder()
        .span("[R7, PC] = [PC, BaseR];", 0)
        .build()
}

fn trap_pseudocode() -> PseudocodeState {
    PseudocodeState::builder()
        .plain("(interrupt logic)\n")
        .span("PC = ", 2).span("mem[", 1).span("ZEXT(trapvect8)", 0).span("]", 1).span(";", 2)
        .build()
}

static FETCH_SEQ: &[&[&str]] = &[
    &[
        "1 (GatePC)",
        "GatePC selector",
        "GatePC (shape)",
        "PC to BUS",
        "Top Arrow",
        "Mid Arrow",
        "Low Arrow",
        "BUS to MAR",
        "1 (MAR selector)",
        "MAR selector",
        "MAR (shape)",
        "PC to MUXES (joint line)",
        "PC to PCMUX (1)",
        "+1 box",
        "PC to PCMUX (2)",
        "PC to PCMUX (3)",
        "PC to PCMUX (4)",
        "00 (PCMUX selector)",
        "PCMUX selector",
        "PCMUX (shape)",
        "PCMUX to PC",
        "1 (LD.PC)",
        "PC selector",
        "PC (shape)",
    ],
    &[
        "MAR to MEMORY",
        "0 (RW)",
        "RW selector",
        "1 (MEM.EN)",
        "MEM.EN selector",
        "Memory (shape)",
        "MEMORY to MDRMUX (1)",
        "MEMORY to MDRMUX (2)",
        "MEMORY to MDRMUX (3)",
        "1 (MDRMUX selector)",
        "MDRMUX selector",
        "MDRMUX (shape)",
        "MDRMUX to MDR",
        "1 (LD.MDR)",
        "MDR selector",
        "MDR (shape)",
    ],
    &[
        "1 (Gate.MDR)",
        "GateMDR selector",
        "GateMDR (shape)",
        "MDR to BUS",
        "Low Arrow",
        "Bus to IR",
        "1 (LD.IR)",
        "IR selector",
        "IR (shape)",
    ],
];

static DECODE_SEQ: &[&[&str]] = &[
    &[
        "IR to FSM (1)",
        "IR to FSM (2)",
        "FSM (shape)",
    ],
];

static ADD_REG_SEQ: &[&[&str]] = &[
    &[
        "1 (SR1MUX selector)",
        "SR1MUX selector",
        "IR[8:6] (SR1MUX text)",
        "IR[8:6] (SR1MUX selector)",
        "SR1MUX (shape)",
        "SR1MUX (output)",
        "SR1 selector",
        "Register to ALU (joint)",
        "IR[2:0] (text)",
        "SR2 selector",
        "Register to SR2MUX",
        "0 (SR2MUX selector)",
        "SR2MUX selector",
        "SR2MUX (shape)",
        "SR2MUX to ALU",
        "00: ADD",
        "ALU selector",
        "ALU (shape)",
        "1 (Gate.ALU)",
        "Gate.ALU selector",
        "GateALU (shape)",
        "ALU to BUS",
        "Low Arrow",
        "BUS to CC (1)",
        "logic (rect)",
        "BUS to CC (2)",
        "1 (LD.CC)",
        "CC selector",
        "CC (shape)",
        "CC to FSM (1)",
        "CC to FSM (2)",
        "FSM (shape)",
        "Low Arrow",
        "Mid Arrow",
        "Top Arrow",
        "Bus to Register",
        "00 (DRMUX selector)",
        "DRMUX selector",
        "IR[11:9] (DRMUX text)",
        "IR[11:9] (DRMUX selector)",
        "DRMUX (shape)",
        "DRMUX (output)",
        "DR selector",
        "1 (LD.REG)",
        "LD.REG selector",
        "Register File (shape)",
    ],
];

static ADD_IMM_SEQ: &[&[&str]] = &[
    &[
        "1 (SR1MUX selector)",
        "SR1MUX selector",
        "IR[8:6] (SR1MUX text)",
        "IR[8:6] (SR1MUX selector)",
        "SR1MUX (shape)",
        "SR1MUX (output)",
        "SR1 selector",
        "Register to ALU (joint)",
        "IR to SR2MUX (1)",
        "IR to SR2MUX (2)",
        "SEXT[4:0] (shape)",
        "IR to SR2MUX (3)",
        "IR to SR2MUX (4)",
        "1 (SR2MUX selector)",
        "SR2MUX selector",
        "SR2MUX (shape)",
        "SR2MUX to ALU",
        "00: ADD",
        "ALU selector",
        "ALU (shape)",
        "1 (Gate.ALU)",
        "Gate.ALU selector",
        "GateALU (shape)",
        "ALU to BUS",
        "Low Arrow",
        "BUS to CC (1)",
        "logic (rect)",
        "BUS to CC (2)",
        "1 (LD.CC)",
        "CC selector",
        "CC (shape)",
        "CC to FSM (1)",
        "CC to FSM (2)",
        "FSM (shape)",
        "Low Arrow",
        "Mid Arrow",
        "Top Arrow",
        "Bus to Register",
        "00 (DRMUX selector)",
        "DRMUX selector",
        "IR[11:9] (DRMUX text)",
        "IR[11:9] (DRMUX selector)",
        "DRMUX (shape)",
        "DRMUX (output)",
        "DR selector",
        "1 (LD.REG)",
        "LD.REG selector",
        "Register File (shape)",
    ],
];

static AND_IMM_SEQ: &[&[&str]] = &[
    &[
        "1 (SR1MUX selector)",
        "SR1MUX selector",
        "IR[8:6] (SR1MUX text)",
        "IR[8:6] (SR1MUX selector)",
        "SR1MUX (shape)",
        "SR1MUX (output)",
        "SR1 selector",
        "Register to ALU (joint)",
        "IR to SR2MUX (1)",
        "IR to SR2MUX (2)",
        "SEXT[4:0] (shape)",
        "IR to SR2MUX (3)",
        "IR to SR2MUX (4)",
        "1 (SR2MUX selector)",
        "SR2MUX selector",
        "SR2MUX (shape)",
        "SR2MUX to ALU",
        "01: AND",
        "ALU selector",
        "ALU (shape)",
        "1 (Gate.ALU)",
        "Gate.ALU selector",
        "GateALU (shape)",
        "ALU to BUS",
        "Low Arrow",
        "BUS to CC (1)",
        "logic (rect)",
        "BUS to CC (2)",
        "1 (LD.CC)",
        "CC selector",
        "CC (shape)",
        "CC to FSM (1)",
        "CC to FSM (2)",
        "FSM (shape)",
        "Low Arrow",
        "Mid Arrow",
        "Top Arrow",
        "Bus to Register",
        "00 (DRMUX selector)",
        "DRMUX selector",
        "IR[11:9] (DRMUX text)",
        "IR[11:9] (DRMUX selector)",
        "DRMUX (shape)",
        "DRMUX (output)",
        "DR selector",
        "1 (LD.REG)",
        "LD.REG selector",
        "Register File (shape)",
    ],
];

static AND_REG_SEQ: &[&[&str]] = &[
    &[
        "1 (SR1MUX selector)",
        "SR1MUX selector",
        "IR[8:6] (SR1MUX text)",
        "IR[8:6] (SR1MUX selector)",
        "SR1MUX (shape)",
        "SR1MUX (output)",
        "SR1 selector",
        "Register to ALU (joint)",
        "IR[2:0] (text)",
        "SR2 selector",
        "Register to SR2MUX",
        "0 (SR2MUX selector)",
        "SR2MUX selector",
        "SR2MUX (shape)",
        "SR2MUX to ALU",
        "01: AND",
        "ALU selector",
        "ALU (shape)",
        "1 (Gate.ALU)",
        "Gate.ALU selector",
        "GateALU (shape)",
        "ALU to BUS",
        "Low Arrow",
        "BUS to CC (1)",
        "logic (rect)",
        "BUS to CC (2)",
        "1 (LD.CC)",
        "CC selector",
        "CC (shape)",
        "CC to FSM (1)",
        "CC to FSM (2)",
        "FSM (shape)",
        "Low Arrow",
        "Mid Arrow",
        "Top Arrow",
        "Bus to Register",
        "00 (DRMUX selector)",
        "DRMUX selector",
        "IR[11:9] (DRMUX text)",
        "IR[11:9] (DRMUX selector)",
        "DRMUX (shape)",
        "DRMUX (output)",
        "DR selector",
        "1 (LD.REG)",
        "LD.REG selector",
        "Register File (shape)",
    ],
];

static NOT_SEQ: &[&[&str]] = &[
    &[
        "1 (SR1MUX selector)",
        "SR1MUX selector",
        "IR[8:6] (SR1MUX text)",
        "IR[8:6] (SR1MUX selector)",
        "SR1MUX (shape)",
        "SR1MUX (output)",
        "SR1 selector",
        "Register to ALU (joint)",
        "10: NOT",
        "ALU selector",
        "ALU (shape)",
        "1 (Gate.ALU)",
        "Gate.ALU selector",
        "GateALU (shape)",
        "ALU to BUS",
        "Low Arrow",
        "BUS to CC (1)",
        "logic (rect)",
        "BUS to CC (2)",
        "1 (LD.CC)",
        "CC selector",
        "CC (shape)",
        "CC to FSM (1)",
        "CC to FSM (2)",
        "FSM (shape)",
        "Low Arrow",
        "Mid Arrow",
        "Top Arrow",
        "Bus to Register",
        "00 (DRMUX selector)",
        "DRMUX selector",
        "IR[11:9] (DRMUX text)",
        "IR[11:9] (DRMUX selector)",
        "DRMUX (shape)",
        "DRMUX (output)",
        "DR selector",
        "1 (LD.REG)",
        "LD.REG selector",
        "Register File (shape)",
    ],
];

static LD_SEQ: &[&[&str]] = &[
    &[
        "IR to ZEXT/SEXT (1)",
        "IR to ZEXT/SEXT (2)",
        "Bus to SEXT [8:0]",
        "SEXT[8:0] (shape)",
        "SEXT9 to MUX (1)",
        "SEXT9 to MUX (2)",
        "10 (ADDR2MUX selector)",
        "ADDR2 selector",
        "ADDR2MUX (shape)",
        "ADDR2MUX to ADDR (1)",
        "ADDR2MUX to ADDR (2)",
        "ADDR2MUX to ADDR (3)",
        "PC to MUXES (joint line)",
        "PC to ADDR1MUX(1)",
        "PC to ADDR1MUX(2)",
        "PC to ADDR1MUX(3)",
        "0 (ADDR1MUX selector)",
        "ADDR1MUX selector",
        "ADDR1MUX (shape)",
        "ADDR1MUX to ADDR (1)",
        "ADDR1MUX to ADDR (2)",
        "ADDR1MUX to ADDR (3)",
        "ADDR (shape)",
        "ADDR to MUXES (joint)",
        "ADDR to MARMUX (2)",
        "ADDR to MARMUX (3)",
        "1 (MARMUX selector)",
        "MARMUX selector",
        "MARMUX (shape)",
        "1 (GateMARMUX)",
        "GateMARMUX selector",
        "GateMARMUX (shape)",
        "MARMUX to BUS",
        "Top Arrow",
        "Mid Arrow",
        "Low Arrow",
        "BUS to MAR",
        "1 (MAR selector)",
        "MAR selector",
        "MAR (shape)",
    ],
    &[
        "MAR to MEMORY",
        "0 (RW)",
        "RW selector",
        "1 (MEM.EN)",
        "MEM.EN selector",
        "Memory (shape)",
        "MEMORY to MDRMUX (1)",
        "MEMORY to MDRMUX (2)",
        "MEMORY to MDRMUX (3)",
        "1 (MDRMUX selector)",
        "MDRMUX selector",
        "MDRMUX (shape)",
        "MDRMUX to MDR",
        "MDR selector",
        "MDR (shape)",
    ],
    &[
        "GateMDR selector",
        "GateMDR (shape)",
        "MDR to BUS",
        "Low Arrow",
        "BUS to CC (1)",
        "logic (rect)",
        "BUS to CC (2)",
        "1 (LD.CC)",
        "CC selector",
        "CC (shape)",
        "CC to FSM (1)",
        "CC to FSM (2)",
        "FSM (shape)",
        "Low Arrow",
        "Mid Arrow",
        "Top Arrow",
        "Bus to Register",
        "00 (DRMUX selector)",
        "DRMUX selector",
        "IR[11:9] (DRMUX text)",
        "IR[11:9] (DRMUX selector)",
        "DRMUX (shape)",
        "DRMUX (output)",
        "DR selector",
        "1 (LD.REG)",
        "LD.REG selector",
        "Register File (shape)",
    ],
];

static LDI_SEQ: &[&[&str]] = &[
    &[
        "IR to ZEXT/SEXT (1)",
        "IR to ZEXT/SEXT (2)",
        "Bus to SEXT [8:0]",
        "SEXT[8:0] (shape)",
        "SEXT9 to MUX (1)",
        "SEXT9 to MUX (2)",
        "10 (ADDR2MUX selector)",
        "ADDR2 selector",
        "ADDR2MUX (shape)",
        "ADDR2MUX to ADDR (1)",
        "ADDR2MUX to ADDR (2)",
        "ADDR2MUX to ADDR (3)",
        "PC to MUXES (joint line)",
        "PC to ADDR1MUX(1)",
        "PC to ADDR1MUX(2)",
        "PC to ADDR1MUX(3)",
        "0 (ADDR1MUX selector)",
        "ADDR1MUX selector",
        "ADDR1MUX (shape)",
        "ADDR1MUX to ADDR (1)",
        "ADDR1MUX to ADDR (2)",
        "ADDR1MUX to ADDR (3)",
        "ADDR (shape)",
        "ADDR to MUXES (joint)",
        "ADDR to MARMUX (2)",
        "ADDR to MARMUX (3)",
        "1 (MARMUX selector)",
        "MARMUX selector",
        "MARMUX (shape)",
        "1 (GateMARMUX)",
        "GateMARMUX selector",
        "GateMARMUX (shape)",
        "MARMUX to BUS",
        "Top Arrow",
        "Mid Arrow",
        "Low Arrow",
        "BUS to MAR",
        "1 (MAR selector)",
        "MAR selector",
        "MAR (shape)",
    ],
    &[
        "MAR to MEMORY",
        "0 (RW)",
        "RW selector",
        "1 (MEM.EN)",
        "MEM.EN selector",
        "Memory (shape)",
        "MEMORY to MDRMUX (1)",
        "MEMORY to MDRMUX (2)",
        "MEMORY to MDRMUX (3)",
        "1 (MDRMUX selector)",
        "MDRMUX selector",
        "MDRMUX (shape)",
        "MDRMUX to MDR",
        "MDR selector",
        "MDR (shape)",
    ],
    &[
        "GateMDR selector",
        "GateMDR (shape)",
        "MDR to BUS",
        "Low Arrow",
        "BUS to MAR",
        "1 (MAR selector)",
        "MAR selector",
        "MAR (shape)",
    ],
    &[
        "MAR to MEMORY",
        "0 (RW)",
        "RW selector",
        "1 (MEM.EN)",
        "MEM.EN selector",
        "Memory (shape)",
        "MEMORY to MDRMUX (1)",
        "MEMORY to MDRMUX (2)",
        "MEMORY to MDRMUX (3)",
        "1 (MDRMUX selector)",
        "MDRMUX selector",
        "MDRMUX (shape)",
        "MDRMUX to MDR",
        "MDR selector",
        "MDR (shape)",
    ],
    &[
        "GateMDR selector",
        "GateMDR (shape)",
        "MDR to BUS",
        "Low Arrow",
        "BUS to CC (1)",
        "logic (rect)",
        "BUS to CC (2)",
        "1 (LD.CC)",
        "CC selector",
        "CC (shape)",
        "CC to FSM (1)",
        "CC to FSM (2)",
        "FSM (shape)",
        "Low Arrow",
        "Mid Arrow",
        "Top Arrow",
        "Bus to Register",
        "00 (DRMUX selector)",
        "DRMUX selector",
        "IR[11:9] (DRMUX text)",
        "IR[11:9] (DRMUX selector)",
        "DRMUX (shape)",
        "DRMUX (output)",
        "DR selector",
        "1 (LD.REG)",
        "LD.REG selector",
        "Register File (shape)",
    ],
];

static LDR_SEQ: &[&[&str]] = &[
    &[
        "IR to ZEXT/SEXT (1)",
        "IR to ZEXT/SEXT (2)",
        "Bus to SEXT [5:0]",
        "SEXT[5:0] (shape)",
        "SEXT6 to MUX (1)",
        "SEXT6 to MUX (2)",
        "01 (ADDR2MUX selector)",
        "ADDR2 selector",
        "ADDR2MUX (shape)",
        "ADDR2MUX to ADDR (1)",
        "ADDR2MUX to ADDR (2)",
        "ADDR2MUX to ADDR (3)",
        "1 (SR1MUX selector)",
        "SR1MUX selector",
        "IR[8:6] (SR1MUX text)",
        "IR[8:6] (SR1MUX selector)",
        "SR1MUX (shape)",
        "SR1MUX (output)",
        "SR1 selector",
        "Register to ALU (joint)",
        "SR1 to ADDR1MUX (1)",
        "SR1 to ADDR1MUX (2)",
        "1 (ADDR1MUX selector)",
        "ADDR1MUX selector",
        "ADDR1MUX (shape)",
        "ADDR1MUX to ADDR (1)",
        "ADDR1MUX to ADDR (2)",
        "ADDR1MUX to ADDR (3)",
        "ADDR (shape)",
        "ADDR to MUXES (joint)",
        "ADDR to MARMUX (2)",
        "ADDR to MARMUX (3)",
        "1 (MARMUX selector)",
        "MARMUX selector",
        "MARMUX (shape)",
        "1 (GateMARMUX)",
        "GateMARMUX selector",
        "GateMARMUX (shape)",
        "MARMUX to BUS",
        "Top Arrow",
        "Mid Arrow",
        "Low Arrow",
        "BUS to MAR",
        "1 (MAR selector)",
        "MAR selector",
        "MAR (shape)",
    ],
    &[
        "MAR to MEMORY",
        "0 (RW)",
        "RW selector",
        "1 (MEM.EN)",
        "MEM.EN selector",
        "Memory (shape)",
        "MEMORY to MDRMUX (1)",
        "MEMORY to MDRMUX (2)",
        "MEMORY to MDRMUX (3)",
        "1 (MDRMUX selector)",
        "MDRMUX selector",
        "MDRMUX (shape)",
        "MDRMUX to MDR",
        "1 (LD.MDR)",
        "MDR selector",
        "MDR (shape)",
    ],
    &[
        "GateMDR selector",
        "GateMDR (shape)",
        "MDR to BUS",
        "Low Arrow",
        "BUS to CC (1)",
        "logic (rect)",
        "BUS to CC (2)",
        "1 (LD.CC)",
        "CC selector",
        "CC (shape)",
        "CC to FSM (1)",
        "CC to FSM (2)",
        "FSM (shape)",
        "Low Arrow",
        "Mid Arrow",
        "Top Arrow",
        "Bus to Register",
        "00 (DRMUX selector)",
        "DRMUX selector",
        "IR[11:9] (DRMUX text)",
        "IR[11:9] (DRMUX selector)",
        "DRMUX (shape)",
        "DRMUX (output)",
        "DR selector",
        "1 (LD.REG)",
        "LD.REG selector",
        "Register File (shape)",
    ],
];

static ST_SEQ: &[&[&str]] = &[
    &[
        "IR to ZEXT/SEXT (1)",
        "IR to ZEXT/SEXT (2)",
        "Bus to SEXT [8:0]",
        "SEXT[8:0] (shape)",
        "SEXT9 to MUX (1)",
        "SEXT9 to MUX (2)",
        "10 (ADDR2MUX selector)",
        "ADDR2 selector",
        "ADDR2MUX (shape)",
        "ADDR2MUX to ADDR (1)",
        "ADDR2MUX to ADDR (2)",
        "ADDR2MUX to ADDR (3)",
        "PC to MUXES (joint line)",
        "PC to ADDR1MUX(1)",
        "PC to ADDR1MUX(2)",
        "PC to ADDR1MUX(3)",
        "0 (ADDR1MUX selector)",
        "ADDR1MUX selector",
        "ADDR1MUX (shape)",
        "ADDR1MUX to ADDR (1)",
        "ADDR1MUX to ADDR (2)",
        "ADDR1MUX to ADDR (3)",
        "ADDR (shape)",
        "ADDR to MUXES (joint)",
        "ADDR to MARMUX (2)",
        "ADDR to MARMUX (3)",
        "1 (MARMUX selector)",
        "MARMUX selector",
        "MARMUX (shape)",
        "1 (GateMARMUX)",
        "GateMARMUX selector",
        "GateMARMUX (shape)",
        "MARMUX to BUS",
        "Top Arrow",
        "Mid Arrow",
        "Low Arrow",
        "BUS to MAR",
        "1 (MAR selector)",
        "MAR selector",
        "MAR (shape)",
    ],
    &[
        "0 (SR1MUX selector)",
        "SR1MUX selector",
        "IR[11:9] (SR1MUX text)",
        "IR[11:9] (SR1MUX selector)",
        "SR1MUX (shape)",
        "SR1MUX (output)",
        "SR1 selector",
        "Register to ALU (joint)",
        "11: PASS",
        "ALU selector",
        "ALU (shape)",
        "1 (Gate.ALU)",
        "ALU selector",
        "Gate.ALU selector",
        "GateALU (shape)",
        "ALU to BUS",
        "Low Arrow",
        "BUS to MDRMUX (1)",
        "BUS to MDRMUX (2)",
        "BUS to MDRMUX (3)",
        "0 (MDRMUX selector)",
        "MDRMUX selector",
        "MDRMUX (shape)",
        "MDRMUX to MDR",
        "1 (LD.MDR)",
        "MDR selector",
        "MDR (shape)",
    ],
    &[
        "1 (RW)",
        "RW selector",
        "1 (MEM.EN)",
        "MEM.EN selector",
        "MAR to MEMORY",
        "MDR to MEMORY",
        "Memory (shape)",
    ],
];

static STI_SEQ: &[&[&str]] = &[
    &[
        "IR to ZEXT/SEXT (1)",
        "IR to ZEXT/SEXT (2)",
        "Bus to SEXT [8:0]",
        "SEXT[8:0] (shape)",
        "SEXT9 to MUX (1)",
        "SEXT9 to MUX (2)",
        "10 (ADDR2MUX selector)",
        "ADDR2 selector",
        "ADDR2MUX (shape)",
        "ADDR2MUX to ADDR (1)",
        "ADDR2MUX to ADDR (2)",
        "ADDR2MUX to ADDR (3)",
        "PC to MUXES (joint line)",
        "PC to ADDR1MUX(1)",
        "PC to ADDR1MUX(2)",
        "PC to ADDR1MUX(3)",
        "0 (ADDR1MUX selector)",
        "ADDR1MUX selector",
        "ADDR1MUX (shape)",
        "ADDR1MUX to ADDR (1)",
        "ADDR1MUX to ADDR (2)",
        "ADDR1MUX to ADDR (3)",
        "ADDR (shape)",
        "ADDR to MUXES (joint)",
        "ADDR to MARMUX (2)",
        "ADDR to MARMUX (3)",
        "1 (MARMUX selector)",
        "MARMUX selector",
        "MARMUX (shape)",
        "1 (GateMARMUX)",
        "GateMARMUX selector",
        "GateMARMUX (shape)",
        "MARMUX to BUS",
        "Top Arrow",
        "Mid Arrow",
        "Low Arrow",
        "BUS to MAR",
        "1 (MAR selector)",
        "MAR selector",
        "MAR (shape)",
    ],
    &[
        "MAR to MEMORY",
        "0 (RW)",
        "RW selector",
        "1 (MEM.EN)",
        "MEM.EN selector",
        "Memory (shape)",
        "MEMORY to MDRMUX (1)",
        "MEMORY to MDRMUX (2)",
        "MEMORY to MDRMUX (3)",
        "1 (MDRMUX selector)",
        "MDRMUX selector",
        "MDRMUX (shape)",
        "MDRMUX to MDR",
        "MDR selector",
        "MDR (shape)",
    ],
    &[
        "GateMDR selector",
        "GateMDR (shape)",
        "MDR to BUS",
        "Low Arrow",
        "BUS to MAR",
        "1 (MAR selector)",
        "MAR selector",
        "MAR (shape)",
    ],
    &[
        "0 (SR1MUX selector)",
        "SR1MUX selector",
        "IR[11:9] (SR1MUX text)",
        "IR[11:9] (SR1MUX selector)",
        "SR1MUX (shape)",
        "SR1MUX (output)",
        "SR1 selector",
        "Register to ALU (joint)",
        "11: PASS",
        "ALU selector",
        "ALU (shape)",
        "1 (Gate.ALU)",
        "Gate.ALU selector",
        "GateALU (shape)",
        "ALU to BUS",
        "Low Arrow",
        "BUS to MDRMUX (1)",
        "BUS to MDRMUX (2)",
        "BUS to MDRMUX (3)",
        "0 (MDRMUX selector)",
        "MDRMUX selector",
        "MDRMUX (shape)",
        "MDRMUX to MDR",
        "1 (LD.MDR)",
        "MDR selector",
        "MDR (shape)",
    ],
    &[
        "1 (RW)",
        "RW selector",
        "1 (MEM.EN)",
        "MEM.EN selector",
        "MAR to MEMORY",
        "MDR to MEMORY",
        "Memory (shape)",
    ],
];

static STR_SEQ: &[&[&str]] = &[
    &[
        "IR to ZEXT/SEXT (1)",
        "IR to ZEXT/SEXT (2)",
        "Bus to SEXT [5:0]",
        "SEXT[5:0] (shape)",
        "SEXT6 to MUX (1)",
        "SEXT6 to MUX (2)",
        "01 (ADDR2MUX selector)",
        "ADDR2 selector",
        "ADDR2MUX (shape)",
        "ADDR2MUX to ADDR (1)",
        "ADDR2MUX to ADDR (2)",
        "ADDR2MUX to ADDR (3)",
        "1 (SR1MUX selector)",
        "SR1MUX selector",
        "IR[8:6] (SR1MUX text)",
        "IR[8:6] (SR1MUX selector)",
        "SR1MUX (shape)",
        "SR1MUX (output)",
        "SR1 selector",
        "Register to ALU (joint)",
        "SR1 to ADDR1MUX (1)",
        "SR1 to ADDR1MUX (2)",
        "1 (ADDR1MUX selector)",
        "ADDR1MUX selector",
        "ADDR1MUX (shape)",
        "ADDR1MUX to ADDR (1)",
        "ADDR1MUX to ADDR (2)",
        "ADDR1MUX to ADDR (3)",
        "ADDR (shape)",
        "ADDR to MUXES (joint)",
        "ADDR to MARMUX (2)",
        "ADDR to MARMUX (3)",
        "1 (MARMUX selector)",
        "MARMUX selector",
        "MARMUX (shape)",
        "1 (GateMARMUX)",
        "GateMARMUX selector",
        "GateMARMUX (shape)",
        "MARMUX to BUS",
        "Top Arrow",
        "Mid Arrow",
        "Low Arrow",
        "BUS to MAR",
        "1 (MAR selector)",
        "MAR selector",
        "MAR (shape)",
    ],
    &[
        "0 (SR1MUX selector)",
        "SR1MUX selector",
        "IR[11:9] (SR1MUX text)",
        "IR[11:9] (SR1MUX selector)",
        "SR1MUX (shape)",
        "SR1MUX (output)",
        "SR1 selector",
        "Register to ALU (joint)",
        "11: PASS",
        "ALU selector",
        "ALU (shape)",
        "1 (Gate.ALU)",
        "Gate.ALU selector",
        "GateALU (shape)",
        "ALU to BUS",
        "Low Arrow",
        "BUS to MDRMUX (1)",
        "BUS to MDRMUX (2)",
        "BUS to MDRMUX (3)",
        "0 (MDRMUX selector)",
        "MDRMUX selector",
        "MDRMUX (shape)",
        "MDRMUX to MDR",
        "1 (LD.MDR)",
        "MDR selector",
        "MDR (shape)",
    ],
    &[
        "1 (RW)",
        "RW selector",
        "1 (MEM.EN)",
        "MEM.EN selector",
        "MAR to MEMORY",
        "MDR to MEMORY",
        "Memory (shape)",
    ],
];

static LEA_SEQ: &[&[&str]] = &[
    &[
        "IR to ZEXT/SEXT (1)",
        "IR to ZEXT/SEXT (2)",
        "Bus to SEXT [8:0]",
        "SEXT[8:0] (shape)",
        "SEXT9 to MUX (1)",
        "SEXT9 to MUX (2)",
        "10 (ADDR2MUX selector)",
        "ADDR2 selector",
        "ADDR2MUX (shape)",
        "ADDR2MUX to ADDR (1)",
        "ADDR2MUX to ADDR (2)",
        "ADDR2MUX to ADDR (3)",
        "PC to MUXES (joint line)",
        "PC to ADDR1MUX(1)",
        "PC to ADDR1MUX(2)",
        "PC to ADDR1MUX(3)",
        "0 (ADDR1MUX selector)",
        "ADDR1MUX selector",
        "ADDR1MUX (shape)",
        "ADDR1MUX to ADDR (1)",
        "ADDR1MUX to ADDR (2)",
        "ADDR1MUX to ADDR (3)",
        "ADDR (shape)",
        "ADDR to MUXES (joint)",
        "ADDR to MARMUX (2)",
        "ADDR to MARMUX (3)",
        "1 (MARMUX selector)",
        "MARMUX selector",
        "MARMUX (shape)",
        "1 (GateMARMUX)",
        "GateMARMUX selector",
        "GateMARMUX (shape)",
        "MARMUX to BUS",
        "Top Arrow",
        "Bus to Register",
        "00 (DRMUX selector)",
        "DRMUX selector",
        "IR[11:9] (DRMUX text)",
        "IR[11:9] (DRMUX selector)",
        "DRMUX (shape)",
        "DRMUX (output)",
        "DR selector",
        "1 (LD.REG)",
        "LD.REG selector",
        "Register File (shape)",
    ],
];

static BR_SEQ: &[&[&str]] = &[
    &[
        "IR to ZEXT/SEXT (1)",
        "IR to ZEXT/SEXT (2)",
        "Bus to SEXT [8:0]",
        "SEXT[8:0] (shape)",
        "SEXT9 to MUX (1)",
        "SEXT9 to MUX (2)",
        "10 (ADDR2MUX selector)",
        "ADDR2 selector",
        "ADDR2MUX (shape)",
        "ADDR2MUX to ADDR (1)",
        "ADDR2MUX to ADDR (2)",
        "ADDR2MUX to ADDR (3)",
        "PC to MUXES (joint line)",
        "PC to ADDR1MUX(1)",
        "PC to ADDR1MUX(2)",
        "PC to ADDR1MUX(3)",
        "0 (ADDR1MUX selector)",
        "ADDR1MUX selector",
        "ADDR1MUX (shape)",
        "ADDR1MUX to ADDR (1)",
        "ADDR1MUX to ADDR (2)",
        "ADDR1MUX to ADDR (3)",
        "ADDR (shape)",
        "ADDR to MUXES (joint)",
        "ADDR to PCMUX (2)",
        "ADDR to PCMUX (3)",
        "01 (PCMUX selector)",
        "PCMUX selector",
        "PCMUX (shape)",
        "PCMUX to PC",
        "1 (LD.PC)",
        "PC selector",
        "PC (shape)",
    ],
];

static JMP_SEQ: &[&[&str]] = &[
    &[
        "1 (SR1MUX selector)",
        "SR1MUX selector",
        "IR[8:6] (SR1MUX text)",
        "IR[8:6] (SR1MUX selector)",
        "SR1MUX (shape)",
        "SR1MUX (output)",
        "SR1 selector",
        "Register to ALU (joint)",
        "SR1 to ADDR1MUX (1)",
        "SR1 to ADDR1MUX (2)",
        "1 (ADDR1MUX selector)",
        "ADDR1MUX selector",
        "ADDR1MUX (shape)",
        "ADDR1MUX to ADDR (1)",
        "ADDR1MUX to ADDR (2)",
        "ADDR1MUX to ADDR (3)",
        "0 (16-bit) (text)",
        "00 ADDR2MUX input",
        "00 (ADDR2MUX selector)",
        "ADDR2 selector",
        "ADDR2MUX (shape)",
        "ADDR2MUX to ADDR (1)",
        "ADDR2MUX to ADDR (2)",
        "ADDR2MUX to ADDR (3)",
        "ADDR (shape)",
        "ADDR to MUXES (joint)",
        "ADDR to PCMUX (2)",
        "ADDR to PCMUX (3)",
        "PCMUX selector",
        "PCMUX (shape)",
        "PCMUX to PC",
        "1 (LD.PC)",
        "PC selector",
        "PC (shape)",
    ],
];

static JSR_SEQ: &[&[&str]] = &[
    &[
        "1 (GatePC)",
        "GatePC selector",
        "GatePC (shape)",
        "PC to BUS",
        "Top Arrow",
        "Bus to Register",
        "01 (DRMUX selector)",
        "DRMUX selector",
        "Reg 7 (DRMUX text)",
        "Reg 7 (DRMUX selector)",
        "DRMUX (shape)",
        "DRMUX (output)",
        "DR selector",
        "1 (LD.REG)",
        "LD.REG selector",
        "Register File (shape)",
        "IR to ZEXT/SEXT (1)",
        "IR to ZEXT/SEXT (2)",
        "Bus to SEXT [10:0]",
        "SEXT[10:0] (shape)",
        "SEXT11 to MUX (1)",
        "SEXT11 to MUX (2)",
        "11 (ADDR2MUX selector)",
        "ADDR2 selector",
        "ADDR2MUX (shape)",
        "ADDR2MUX to ADDR (1)",
        "ADDR2MUX to ADDR (2)",
        "ADDR2MUX to ADDR (3)",
        "PC to MUXES (joint line)",
        "PC to ADDR1MUX(1)",
        "PC to ADDR1MUX(2)",
        "PC to ADDR1MUX(3)",
        "0 (ADDR1MUX selector)",
        "ADDR1MUX selector",
        "ADDR1MUX (shape)",
        "ADDR1MUX to ADDR (1)",
        "ADDR1MUX to ADDR (2)",
        "ADDR1MUX to ADDR (3)",
        "ADDR (shape)",
        "ADDR to MUXES (joint)",
        "ADDR to PCMUX (2)",
        "ADDR to PCMUX (3)",
        "PCMUX selector",
        "PCMUX (shape)",
        "PCMUX to PC",
        "1 (LD.PC)",
        "PC selector",
        "PC (shape)",
    ],
];

static JSRR_SEQ: &[&[&str]] = &[
    &[
        "1 (GatePC)",
        "GatePC selector",
        "GatePC (shape)",
        "PC to BUS",
        "Top Arrow",
        "Bus to Register",
        "01 (DRMUX selector)",
        "DRMUX selector",
        "Reg 7 (DRMUX text)",
        "Reg 7 (DRMUX selector)",
        "DRMUX (shape)",
        "DRMUX (output)",
        "DR selector",
        "1 (LD.REG)",
        "LD.REG selector",
        "Register File (shape)",
        "1 (SR1MUX selector)",
        "SR1MUX selector",
        "IR[8:6] (SR1MUX text)",
        "IR[8:6] (SR1MUX selector)",
        "SR1MUX (shape)",
        "SR1MUX (output)",
        "SR1 selector",
        "Register to ALU (joint)",
        "SR1 to ADDR1MUX (1)",
        "SR1 to ADDR1MUX (2)",
        "1 (ADDR1MUX selector)",
        "ADDR1MUX selector",
        "ADDR1MUX (shape)",
        "ADDR1MUX to ADDR (1)",
        "ADDR1MUX to ADDR (2)",
        "ADDR1MUX to ADDR (3)",
        "0 (16-bit) (text)",
        "00 ADDR2MUX input",
        "00 (ADDR2MUX selector)",
        "ADDR2 selector",
        "ADDR2MUX (shape)",
        "ADDR2MUX to ADDR (1)",
        "ADDR2MUX to ADDR (2)",
        "ADDR2MUX to ADDR (3)",
        "ADDR (shape)",
        "ADDR to MUXES (joint)",
        "ADDR to PCMUX (2)",
        "ADDR to PCMUX (3)",
        "PCMUX selector",
        "PCMUX (shape)",
        "PCMUX to PC",
        "1 (LD.PC)",
        "PC selector",
        "PC (shape)",
    ],
];

static TRAP_SEQ: &[&[&str]] = &[
    &[
        "IR to ZEXT/SEXT (1)",
        "IR to ZEXT/SEXT (2)",
        "ZEXT shape",
        "ZEXT to MARMUX (1)",
        "ZEXT to MARMUX (2)",
        "ZEXT to MARMUX (3)",
        "0 (MARMUX selector)",
        "MARMUX selector",
        "MARMUX (shape)",
        "1 (GateMARMUX)",
        "GateMARMUX selector",
        "GateMARMUX (shape)",
        "MARMUX to BUS",
        "Top Arrow",
        "Mid Arrow",
        "Low Arrow",
        "BUS to MAR",
        "1 (MAR selector)",
        "MAR selector",
        "MAR (shape)",
    ],
    &[
        "MAR to MEMORY",
        "0 (RW)",
        "RW selector",
        "1 (MEM.EN)",
        "MEM.EN selector",
        "Memory (shape)",
        "MEMORY to MDRMUX (1)",
        "MEMORY to MDRMUX (2)",
        "MEMORY to MDRMUX (3)",
        "1 (MDRMUX selector)",
        "MDRMUX selector",
        "MDRMUX (shape)",
        "MDRMUX to MDR",
        "1 (LD.MDR)",
        "MDR selector",
        "MDR (shape)",
    ],
    &[
        "1 (GateMDR text)",
        "GateMDR selector",
        "GateMDR (shape)",
        "MDR to BUS",
        "Low Arrow",
        "Mid Arrow",
        "Top Arrow",
        "Bus to PCMUX (1)",
        "Bus to PCMUX (2)",
        "Bus to PCMUX (3)",
        "10 (PCMUX selector)",
        "PCMUX selector",
        "PCMUX (shape)",
        "PCMUX to PC",
        "1 (LD.PC)",
        "PC selector",
        "PC (shape)",
    ],
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pseudocode::CycleRef;

    #[test]
    fn fetch_pseudocode_text() {
        let state = fetch_pseudocode();
        assert_eq!(state.source(), "IR = mem[PC];\nPC = PC + 1;");
    }

    #[test]
    fn alu_variants_disable_the_untaken_arm() {
        let table = lc3_macro_table();

        let reg = table.lookup("ADD_REG").and_then(|m| m.pseudocode.as_ref()).unwrap();
        let imm = table.lookup("ADD_IMM").and_then(|m| m.pseudocode.as_ref()).unwrap();
        assert_eq!(reg.source(), imm.source());

        let cycle_of = |state: &crate::pseudocode::PseudocodeState, text: &str| {
            state.highlights().iter()
                .find(|hl| &state.source()[hl.start..hl.end] == text)
                .map(|hl| hl.cycle)
        };
        assert_eq!(cycle_of(reg, "DR = SR1 + SR2;"), Some(CycleRef::Cycle(0)));
        assert_eq!(cycle_of(reg, "DR = SR1 + SEXT(imm5);"), Some(CycleRef::Disabled));
        assert_eq!(cycle_of(imm, "DR = SR1 + SR2;"), Some(CycleRef::Disabled));
        assert_eq!(cycle_of(imm, "DR = SR1 + SEXT(imm5);"), Some(CycleRef::Cycle(0)));
    }

    #[test]
    fn pseudocode_cycles_stay_within_each_sequence() {
        for (key, data) in lc3_macro_table().iter() {
            let Some(pseudocode) = &data.pseudocode else { continue };
            for hl in pseudocode.highlights() {
                if let CycleRef::Cycle(c) = hl.cycle {
                    assert!(c < data.sequence.len(), "{key} annotates cycle {c} past its last cycle");
                }
            }
        }
    }
}

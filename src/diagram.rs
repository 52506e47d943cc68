//! The element-id registry of the bundled LC-3 datapath diagram.
//!
//! Renderers own the diagram geometry; this module only publishes the
//! namespace of highlightable element ids, so that the macro table and any
//! renderer can be checked against the same list. The naming convention is
//! the element's diagram name plus a parenthesized role where one name covers
//! several elements: `"PC (shape)"`, `"PC selector"`, `"1 (LD.PC)"`,
//! `"PC to BUS"`.

/// Whether `id` names an element of the bundled datapath diagram.
pub fn is_element(id: &str) -> bool {
    ELEMENT_IDS.binary_search(&id).is_ok()
}

/// Every highlightable element id in the bundled datapath diagram, sorted.
pub static ELEMENT_IDS: &[&str] = &[
    "+1 box",
    "0 (16-bit) (text)",
    "0 (ADDR1MUX selector)",
    "0 (MARMUX selector)",
    "0 (MDRMUX selector)",
    "0 (RW)",
    "0 (SR1MUX selector)",
    "0 (SR2MUX selector)",
    "00 (ADDR2MUX selector)",
    "00 (DRMUX selector)",
    "00 (PCMUX selector)",
    "00 ADDR2MUX input",
    "00: ADD",
    "01 (ADDR2MUX selector)",
    "01 (DRMUX selector)",
    "01 (PCMUX selector)",
    "01: AND",
    "1 (ADDR1MUX selector)",
    "1 (Gate.ALU)",
    "1 (Gate.MDR)",
    "1 (GateMARMUX)",
    "1 (GateMDR text)",
    "1 (GatePC)",
    "1 (LD.CC)",
    "1 (LD.IR)",
    "1 (LD.MDR)",
    "1 (LD.PC)",
    "1 (LD.REG)",
    "1 (MAR selector)",
    "1 (MARMUX selector)",
    "1 (MDRMUX selector)",
    "1 (MEM.EN)",
    "1 (RW)",
    "1 (SR1MUX selector)",
    "1 (SR2MUX selector)",
    "10 (ADDR2MUX selector)",
    "10 (PCMUX selector)",
    "10: NOT",
    "11 (ADDR2MUX selector)",
    "11: PASS",
    "ADDR (shape)",
    "ADDR to MARMUX (2)",
    "ADDR to MARMUX (3)",
    "ADDR to MUXES (joint)",
    "ADDR to PCMUX (2)",
    "ADDR to PCMUX (3)",
    "ADDR1MUX (shape)",
    "ADDR1MUX selector",
    "ADDR1MUX to ADDR (1)",
    "ADDR1MUX to ADDR (2)",
    "ADDR1MUX to ADDR (3)",
    "ADDR2 selector",
    "ADDR2MUX (shape)",
    "ADDR2MUX to ADDR (1)",
    "ADDR2MUX to ADDR (2)",
    "ADDR2MUX to ADDR (3)",
    "ALU (shape)",
    "ALU selector",
    "ALU to BUS",
    "BUS to CC (1)",
    "BUS to CC (2)",
    "BUS to MAR",
    "BUS to MDRMUX (1)",
    "BUS to MDRMUX (2)",
    "BUS to MDRMUX (3)",
    "Bus to IR",
    "Bus to PCMUX (1)",
    "Bus to PCMUX (2)",
    "Bus to PCMUX (3)",
    "Bus to Register",
    "Bus to SEXT [10:0]",
    "Bus to SEXT [5:0]",
    "Bus to SEXT [8:0]",
    "CC (shape)",
    "CC selector",
    "CC to FSM (1)",
    "CC to FSM (2)",
    "DR selector",
    "DRMUX (output)",
    "DRMUX (shape)",
    "DRMUX selector",
    "FSM (shape)",
    "Gate.ALU selector",
    "GateALU (shape)",
    "GateMARMUX (shape)",
    "GateMARMUX selector",
    "GateMDR (shape)",
    "GateMDR selector",
    "GatePC (shape)",
    "GatePC selector",
    "IR (shape)",
    "IR selector",
    "IR to FSM (1)",
    "IR to FSM (2)",
    "IR to SR2MUX (1)",
    "IR to SR2MUX (2)",
    "IR to SR2MUX (3)",
    "IR to SR2MUX (4)",
    "IR to ZEXT/SEXT (1)",
    "IR to ZEXT/SEXT (2)",
    "IR[11:9] (DRMUX selector)",
    "IR[11:9] (DRMUX text)",
    "IR[11:9] (SR1MUX selector)",
    "IR[11:9] (SR1MUX text)",
    "IR[2:0] (text)",
    "IR[8:6] (SR1MUX selector)",
    "IR[8:6] (SR1MUX text)",
    "LD.REG selector",
    "Low Arrow",
    "MAR (shape)",
    "MAR selector",
    "MAR to MEMORY",
    "MARMUX (shape)",
    "MARMUX selector",
    "MARMUX to BUS",
    "MDR (shape)",
    "MDR selector",
    "MDR to BUS",
    "MDR to MEMORY",
    "MDRMUX (shape)",
    "MDRMUX selector",
    "MDRMUX to MDR",
    "MEM.EN selector",
    "MEMORY to MDRMUX (1)",
    "MEMORY to MDRMUX (2)",
    "MEMORY to MDRMUX (3)",
    "Memory (shape)",
    "Mid Arrow",
    "PC (shape)",
    "PC selector",
    "PC to ADDR1MUX(1)",
    "PC to ADDR1MUX(2)",
    "PC to ADDR1MUX(3)",
    "PC to BUS",
    "PC to MUXES (joint line)",
    "PC to PCMUX (1)",
    "PC to PCMUX (2)",
    "PC to PCMUX (3)",
    "PC to PCMUX (4)",
    "PCMUX (shape)",
    "PCMUX selector",
    "PCMUX to PC",
    "RW selector",
    "Reg 7 (DRMUX selector)",
    "Reg 7 (DRMUX text)",
    "Register File (shape)",
    "Register to ALU (joint)",
    "Register to SR2MUX",
    "SEXT11 to MUX (1)",
    "SEXT11 to MUX (2)",
    "SEXT6 to MUX (1)",
    "SEXT6 to MUX (2)",
    "SEXT9 to MUX (1)",
    "SEXT9 to MUX (2)",
    "SEXT[10:0] (shape)",
    "SEXT[4:0] (shape)",
    "SEXT[5:0] (shape)",
    "SEXT[8:0] (shape)",
    "SR1 selector",
    "SR1 to ADDR1MUX (1)",
    "SR1 to ADDR1MUX (2)",
    "SR1MUX (output)",
    "SR1MUX (shape)",
    "SR1MUX selector",
    "SR2 selector",
    "SR2MUX (shape)",
    "SR2MUX selector",
    "SR2MUX to ALU",
    "Top Arrow",
    "ZEXT shape",
    "ZEXT to MARMUX (1)",
    "ZEXT to MARMUX (2)",
    "ZEXT to MARMUX (3)",
    "logic (rect)",
];
#[cfg(test)]
mod tests {
    use super::*;

    // binary_search in is_element depends on this.
    #[test]
    fn registry_is_sorted_and_deduped() {
        assert!(ELEMENT_IDS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn resolves_known_and_unknown_ids() {
        assert!(is_element("PC (shape)"));
        assert!(is_element("+1 box"));
        assert!(!is_element("FLUX CAPACITOR"));
        assert!(!is_element(""));
    }
}

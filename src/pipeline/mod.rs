pub mod stage1_inputs;
pub mod stage2_lookup;
pub mod stage3_write;

pub mod stage1_replay;
pub mod stage2_project;
pub mod stage3_classify;
pub mod stage4_report;

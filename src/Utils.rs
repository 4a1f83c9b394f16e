//! different utility modules used throughout the project
/// logger setup and saving of sampled curves into txt/csv files
pub mod logger;
/// tiny module to plot sampled curves
pub mod plots;
/// pretty-printing of task results as tables
pub mod report;
/// store of saved solutions in a toml file
pub mod saved_solutions;
/// parse document with structure like " title1 key1: value1, value2 key2: value2 title2 key3:value3, value4" into sections
pub mod task_parser;
/// runs every section of a task document through the matching calculator
pub mod task_runner;

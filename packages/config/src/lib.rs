// ABOUTME: Configuration constants shared by Taskboard binaries
// ABOUTME: Environment variable names and their fallback values

pub mod constants;

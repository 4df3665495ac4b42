pub mod task_runner;

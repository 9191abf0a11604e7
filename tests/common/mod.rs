pub mod synthetic_log;

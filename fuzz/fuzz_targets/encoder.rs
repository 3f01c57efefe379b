#![no_main]

use data_substrate::fuzz::encoder::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: FuzzCase| harness(data));

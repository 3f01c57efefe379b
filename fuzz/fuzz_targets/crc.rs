#![no_main]

use data_substrate::fuzz::crc::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: FuzzCase| harness(data));

// crates/kaofix-cli/src/cmd/args.rs

use clap::ValueEnum;
use kaofix_core::codec::TextEncoding;

#[derive(Copy, Clone, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum EncodingArg {
    #[default]
    #[value(alias = "utf-8")]
    Utf8,
    #[value(alias = "utf-16le")]
    Utf16le,
    #[value(alias = "utf-16be")]
    Utf16be,
}

impl From<EncodingArg> for TextEncoding {
    fn from(e: EncodingArg) -> Self {
        match e {
            EncodingArg::Utf8 => TextEncoding::Utf8,
            EncodingArg::Utf16le => TextEncoding::Utf16Le,
            EncodingArg::Utf16be => TextEncoding::Utf16Be,
        }
    }
}

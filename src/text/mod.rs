//! Text processing module for normalization, contraction expansion, and tokenization.

pub mod contractions;
pub mod normalizer;
pub mod pipeline;
mod tokenizer;

pub use contractions::{ContractionExpander, EnglishContractions, NoContractions};
pub use normalizer::{UnicodeNormalizer, UnknownMarker, WordConversion};
pub use pipeline::{Pipeline, Span, SOCIAL_PIPELINE};
pub use tokenizer::{split_camel_case, SocialTokenizer, Token, TokenInspector, PLACEHOLDER_ORDER};

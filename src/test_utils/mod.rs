mod helpers;
mod mocks;

pub(crate) use mocks::{ScriptedLLMClient, StaticImageSearch};

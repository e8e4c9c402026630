//! Tariff configuration endpoints

pub mod dto;
pub mod handlers;

pub use dto::{
    PreviewAmountRequest, PreviewAmountResponse, ReplaceTariffsRequest, TariffTierDto,
    TariffTierInput,
};
pub use handlers::{list_tariffs, preview_amount, replace_tariffs, TariffHandlerState};

use anyhow::Result;
use crux_core::typegen::TypeGen;
use std::path::PathBuf;
use wifi_relay_ui_core::{
    events::{AuthEvent, AutoSwitchEvent, DragEvent, HotspotEvent, RelayEvent, UiEvent, WirelessEvent},
    types::{DropDirection, LogLevel, PointerKind},
    App, HapticOutput,
};

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Explicitly register domain event enums to ensure all variants are traced
    gen.register_type::<AuthEvent>()?;
    gen.register_type::<HotspotEvent>()?;
    gen.register_type::<DragEvent>()?;
    gen.register_type::<RelayEvent>()?;
    gen.register_type::<WirelessEvent>()?;
    gen.register_type::<AutoSwitchEvent>()?;
    gen.register_type::<UiEvent>()?;

    // Explicitly register other enums to ensure all variants are traced
    gen.register_type::<PointerKind>()?;
    gen.register_type::<DropDirection>()?;
    gen.register_type::<LogLevel>()?;
    gen.register_type::<HapticOutput>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}

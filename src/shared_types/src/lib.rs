//! Generated TypeScript bindings for the WiFi relay UI core live in `generated/`.

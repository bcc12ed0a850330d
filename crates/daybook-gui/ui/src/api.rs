use serde::{Serialize, de::DeserializeOwned};
use tauri_wasm::{args, invoke};

/// Typed wrapper over the Tauri invoke bridge. Errors come back as plain
/// strings so call sites can log or alert without further mapping.
pub async fn invoke_backend<R, A>(cmd: &str, args_payload: &A) -> Result<R, String>
where
    R: DeserializeOwned,
    A: Serialize + ?Sized,
{
    let payload = args(args_payload).map_err(|e| format!("failed to encode args: {e}"))?;
    let value = invoke(cmd)
        .with_args(payload)
        .await
        .map_err(|e| format!("invoke error: {e:?}"))?;

    serde_wasm_bindgen::from_value(value).map_err(|e| format!("decode error: {e}"))
}

/// Variant for commands that take no payload at all.
pub async fn invoke_backend_no_args<R>(cmd: &str) -> Result<R, String>
where
    R: DeserializeOwned,
{
    let value = invoke(cmd)
        .await
        .map_err(|e| format!("invoke error: {e:?}"))?;

    serde_wasm_bindgen::from_value(value).map_err(|e| format!("decode error: {e}"))
}

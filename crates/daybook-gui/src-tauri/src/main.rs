mod commands;
mod state;

use tracing::{
  error,
  info,
  warn
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{
  EnvFilter,
  fmt
};

fn init_tracing() {
  let filter =
    EnvFilter::try_from_default_env()
      .or_else(|_| {
        EnvFilter::try_new(
          "info,daybook_gui_tauri=\
           debug,daybook_core=debug"
        )
      })
      .unwrap_or_else(|_| {
        EnvFilter::new("info")
      });

  let _ =
    tracing_subscriber::registry()
      .with(filter)
      .with(
        fmt::layer()
          .with_target(true)
          .with_line_number(true)
      )
      .try_init();
}

fn main() {
  init_tracing();

  info!(
    "starting Daybook GUI backend"
  );

  let state = match state::AppState::new()
  {
    | Ok(state) => state,
    | Err(err) => {
      error!(error = %err, "initialization failed");
      std::process::exit(1);
    }
  };

  tauri::Builder::default()
    .setup(|app| {
      install_signal_handlers(
        app.handle().clone()
      );
      Ok(())
    })
    .manage(state)
    .invoke_handler(
      tauri::generate_handler![
        commands::session_get,
        commands::events_list,
        commands::event_insert,
        commands::event_update,
        commands::event_delete,
        commands::ui_log,
        commands::window_minimize,
        commands::window_toggle_maximize,
        commands::window_close,
      ]
    )
    .run(tauri::generate_context!())
    .expect(
      "error while running Daybook \
       GUI backend"
    );
}

fn install_signal_handlers(
  app_handle: tauri::AppHandle
) {
  tauri::async_runtime::spawn(
    async move {
      wait_for_shutdown_signal().await;
      warn!(
        "received shutdown signal; \
         exiting application"
      );
      app_handle.exit(0);
    }
  );
}

#[cfg(unix)]
async fn wait_for_shutdown_signal() {
  use tokio::signal::unix::{
    SignalKind,
    signal
  };

  let mut sigint = match signal(
    SignalKind::interrupt()
  ) {
    | Ok(stream) => stream,
    | Err(error) => {
      error!(
        %error,
        "failed to register SIGINT \
         handler; falling back to \
         ctrl_c"
      );
      let _ =
        tokio::signal::ctrl_c().await;
      return;
    }
  };

  let mut sigterm = match signal(
    SignalKind::terminate()
  ) {
    | Ok(stream) => stream,
    | Err(error) => {
      error!(
        %error,
        "failed to register SIGTERM \
         handler; falling back to \
         ctrl_c"
      );
      let _ =
        tokio::signal::ctrl_c().await;
      return;
    }
  };

  tokio::select! {
    _ = sigint.recv() => {}
    _ = sigterm.recv() => {}
  }
}

#[cfg(not(unix))]
async fn wait_for_shutdown_signal() {
  if let Err(error) =
    tokio::signal::ctrl_c().await
  {
    error!(
      %error,
      "failed waiting for ctrl_c \
       signal"
    );
  }
}

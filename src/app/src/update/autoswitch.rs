//! Auto-switch: the relay scans its known hotspots and joins the first one
//! with working internet. The run drops the connection to the panel, so
//! losing the request is the expected way for a switch to end.

use crux_core::{render::render, Command};

use crate::events::{AutoSwitchEvent, Event};
use crate::haptic_pulse;
use crate::model::Model;
use crate::types::{parse_log_output, LogLevel, LogLine, SwitchTimerRequest, LOG_SEPARATOR};
use crate::{action_url, process_text_response, Effect, HttpCmd};

pub fn handle(event: AutoSwitchEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        AutoSwitchEvent::Start => start(model),
        AutoSwitchEvent::RunResponse(result) => handle_run_response(model, result),

        AutoSwitchEvent::SetTimer { interval } => set_timer(model, &interval),
        AutoSwitchEvent::TimerResponse(result) => {
            model.auto_switch_log = match result {
                Ok(output) => parse_log_output(&output),
                Err(e) => vec![LogLine::new(
                    format!("Setting the switch timer failed: {e}"),
                    LogLevel::Error,
                )],
            };
            render()
        }

        AutoSwitchEvent::LogCopied { ok: true } => {
            model.success_message = Some("Log copied".to_string());
            render()
        }
        AutoSwitchEvent::LogCopied { ok: false } => {
            model.set_error_and_render("Copy failed, please retry".to_string())
        }
    }
}

fn start(model: &mut Model) -> Command<Effect, Event> {
    let pulse = haptic_pulse!(Strong);
    if model.auto_switch_running {
        log::debug!("auto-switch already running");
        return pulse;
    }

    log::info!("starting auto-switch");
    model.auto_switch_running = true;
    model.auto_switch_log = vec![LogLine::new(
        "Switching to a hotspot with working internet",
        LogLevel::Info,
    )];

    let run = HttpCmd::get(action_url("autowifi"))
        .build()
        .then_send(|result| {
            Event::AutoSwitch(AutoSwitchEvent::RunResponse(process_text_response(
                "Auto-switch",
                result,
            )))
        });
    Command::all([pulse, render(), run])
}

fn handle_run_response(model: &mut Model, result: Result<String, String>) -> Command<Effect, Event> {
    model.auto_switch_running = false;
    let lines = &mut model.auto_switch_log;

    match result {
        Ok(output) => {
            log::info!("auto-switch finished");
            lines.extend(parse_log_output(&output));
            lines.push(LogLine::new(LOG_SEPARATOR, LogLevel::Info));
            lines.push(LogLine::new("Auto-switch finished", LogLevel::Success));
        }
        Err(e) => {
            log::warn!("auto-switch ended early: {e}");
            lines.push(LogLine::new(LOG_SEPARATOR, LogLevel::Info));
            lines.push(LogLine::new(
                "Connection lost, waiting for the relay to come back",
                LogLevel::Warning,
            ));
            lines.push(LogLine::new(
                "If it is not back within a minute, reconnect manually and reload the page",
                LogLevel::Warning,
            ));
            lines.push(LogLine::new("Auto-switch ended abnormally", LogLevel::Error));
        }
    }
    render()
}

fn set_timer(model: &mut Model, interval: &str) -> Command<Effect, Event> {
    let pulse = haptic_pulse!(Strong);
    let request = match SwitchTimerRequest::parse(interval) {
        Ok(request) => request,
        Err(e) => return Command::all([pulse, model.set_error_and_render(e)]),
    };

    log::info!("setting auto-switch timer to {} minutes", request.interval);
    model.auto_switch_log.clear();
    let url = format!("{}&interval={}", action_url("wificrontab"), request.interval);
    let timer = HttpCmd::get(url).build().then_send(|result| {
        Event::AutoSwitch(AutoSwitchEvent::TimerResponse(process_text_response(
            "Set switch timer",
            result,
        )))
    });
    Command::all([pulse, render(), timer])
}

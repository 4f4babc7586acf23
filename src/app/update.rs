// SPDX-License-Identifier: MPL-2.0
//! Update handlers for the application message loop.
//!
//! Component events land here and are turned into collaborator calls. This
//! is also the error boundary: a failed call is logged and shown as an
//! error toast, and the loop carries on.

use super::collaborators::Collaborators;
use super::Message;
use crate::application::port::Route;
use crate::domain::{FileSelection, PlanExport, PlanId};
use crate::error::Result;
use crate::ui::footer;
use crate::ui::notifications::{self, Notification};
use crate::ui::page;
use crate::ui::planning_toolbar::{self, ToolbarViewState};
use iced::Task;
use std::path::PathBuf;

/// Mutable application state the handlers work on.
pub struct UpdateContext<'a> {
    pub plan_id: &'a PlanId,
    pub view_state: &'a mut ToolbarViewState,
    pub toolbar: &'a mut planning_toolbar::State,
    pub collaborators: &'a mut Collaborators,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_toolbar_message(
    ctx: &mut UpdateContext<'_>,
    message: planning_toolbar::Message,
) -> Task<Message> {
    let event = planning_toolbar::update(ctx.toolbar, message, ctx.view_state.title());

    match event {
        planning_toolbar::Event::None => Task::none(),
        planning_toolbar::Event::TabChanged(index) => {
            ctx.view_state.set_section(index);
            Task::none()
        }
        planning_toolbar::Event::ExportPlan => {
            match ctx.collaborators.exporter.export_plan(ctx.plan_id) {
                Ok(export) => save_export(export),
                Err(err) => {
                    settle(ctx.notifications, "plan export", Err(err));
                    Task::none()
                }
            }
        }
        planning_toolbar::Event::ImportPlanRequested => open_import_dialog(),
        planning_toolbar::Event::Navigate(route) => {
            navigate(ctx, route);
            Task::none()
        }
        planning_toolbar::Event::SignOut => {
            let result = ctx.collaborators.auth.sign_out();
            if settle(ctx.notifications, "sign-out", result) {
                ctx.notifications
                    .push(Notification::info("notification-signed-out"));
            }
            Task::none()
        }
        planning_toolbar::Event::TitleSubmitted(title) => {
            let result = ctx.collaborators.titles.save_title(ctx.plan_id, &title);
            if settle(ctx.notifications, "title save", result) {
                ctx.view_state.set_title(title);
                ctx.toolbar.close_settings();
                ctx.notifications
                    .push(Notification::success("notification-title-saved"));
            }
            Task::none()
        }
    }
}

pub fn handle_footer_message(ctx: &mut UpdateContext<'_>, message: footer::Message) -> Task<Message> {
    match footer::update(message) {
        footer::Event::Navigate(route) => navigate(ctx, route),
        footer::Event::OpenExternal(url) => {
            let result = ctx.collaborators.links.open(url);
            settle(ctx.notifications, "opening link", result);
        }
    }
    Task::none()
}

pub fn handle_page_message(ctx: &mut UpdateContext<'_>, message: page::Message) -> Task<Message> {
    match page::update(message) {
        page::Event::Navigate(route) => navigate(ctx, route),
    }
    Task::none()
}

/// Opens the JSON file picker without blocking the update loop.
pub fn open_import_dialog() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .set_title("Import plan")
                .add_filter("JSON", &["json"])
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::ImportFileSelected,
    )
}

/// Asks where to put the export and writes it there, off the update loop.
fn save_export(export: PlanExport) -> Task<Message> {
    let dialog = rfd::AsyncFileDialog::new()
        .set_title("Export plan")
        .set_file_name(export.file_name())
        .add_filter("JSON", &["json"]);

    Task::perform(write_export(dialog, export), Message::ExportFinished)
}

async fn write_export(
    dialog: rfd::AsyncFileDialog,
    export: PlanExport,
) -> Result<Option<PathBuf>> {
    let Some(handle) = dialog.save_file().await else {
        return Ok(None);
    };
    handle.write(export.contents()).await?;
    Ok(Some(handle.path().to_path_buf()))
}

pub fn handle_export_finished(
    ctx: &mut UpdateContext<'_>,
    outcome: Result<Option<PathBuf>>,
) -> Task<Message> {
    match outcome {
        Ok(Some(path)) => {
            log::info!("exported plan {} to {}", ctx.plan_id, path.display());
            ctx.notifications
                .push(Notification::success("notification-plan-exported"));
        }
        Ok(None) => log::debug!("plan export cancelled"),
        Err(err) => {
            settle(ctx.notifications, "plan export", Err(err));
        }
    }
    Task::none()
}

/// Hands the picked file to the importer untouched.
pub fn handle_import_selection(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        log::debug!("plan import cancelled");
        return Task::none();
    };

    let result = ctx
        .collaborators
        .importer
        .import_plan(FileSelection::new(path));
    if settle(ctx.notifications, "plan import", result) {
        refresh_title(ctx);
        ctx.notifications
            .push(Notification::success("notification-plan-imported"));
    }
    Task::none()
}

/// Re-reads the open plan's title, which an import may have replaced.
fn refresh_title(ctx: &mut UpdateContext<'_>) {
    match ctx.collaborators.titles.load_title(ctx.plan_id) {
        Ok(Some(title)) => ctx.view_state.set_title(title),
        Ok(None) => {}
        Err(err) => {
            settle(ctx.notifications, "title reload", Err(err));
        }
    }
}

fn navigate(ctx: &mut UpdateContext<'_>, route: Route) {
    let result = ctx.collaborators.navigator.go_to(route.path());
    settle(ctx.notifications, "navigation", result);
}

/// Logs and reports a failed collaborator call. Returns whether it succeeded.
fn settle(notifications: &mut notifications::Manager, action: &str, result: Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            log::error!("{action} failed: {err}");
            notifications.push(Notification::failure(&err));
            false
        }
    }
}

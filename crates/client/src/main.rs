//! eventhub CLI entry point.

use std::future::Future;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use eventhub_client::auth::JwtClaimsDecoder;
use eventhub_client::cli::list::ListArgs;
use eventhub_client::cli::{Cli, Commands, OutputFormat};
use eventhub_client::config::ClientConfig;
use eventhub_client::output::{format_output, format_page, pretty};
use eventhub_client::view::RemoteListView;
use eventhub_client::{ClientError, EventhubClient};
use eventhub_core::listing::Listable;
use eventhub_core::models::{
    pending_join_requests, validate_event, validate_post, validate_reminder, CreateEventRequest,
    CreateReminderRequest, InvitationResponse, ReviewDecision, UpdateEventRequest,
    UpdateSettingsRequest,
};
use eventhub_core::session::SessionContext;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Everything a command needs: the API client, the session and output flags.
struct App {
    client: EventhubClient,
    session: Option<SessionContext>,
    format: OutputFormat,
    quiet: bool,
    page_size: usize,
}

impl App {
    fn print<T: Serialize>(&self, value: &T, render: impl FnOnce(&T) -> String) {
        match self.format {
            OutputFormat::Json => println!("{}", format_output(value, self.format)),
            OutputFormat::Pretty => println!("{}", render(value)),
        }
    }

    fn notice(&self, message: impl std::fmt::Display) {
        if !self.quiet {
            println!("{}", message);
        }
    }

    fn session(&self) -> Result<&SessionContext, ClientError> {
        self.session
            .as_ref()
            .ok_or_else(|| ClientError::Unauthorized("a valid session token is required".to_string()))
    }

    fn require_admin(&self) -> Result<&SessionContext, ClientError> {
        let session = self.session()?;
        if !session.is_admin() {
            return Err(ClientError::Forbidden(
                "administrator role required".to_string(),
            ));
        }
        Ok(session)
    }

    fn print_page<T: Listable + Clone + Serialize>(
        &self,
        title: &str,
        list: &RemoteListView<T>,
        item: fn(&T) -> String,
    ) {
        let slice = list.view().visible_slice();
        println!("{}", format_page(title, &slice, self.format, item));
    }

    /// Fetches a collection, applies the listing flags and prints the page.
    async fn list<T, F>(
        &self,
        title: &str,
        args: &ListArgs,
        fetch: F,
        item: fn(&T) -> String,
    ) -> Result<RemoteListView<T>>
    where
        T: Listable + Clone + Serialize,
        F: Future<Output = eventhub_client::Result<Vec<T>>>,
    {
        let view = args.view::<T>(self.page_size)?;
        let mut list = RemoteListView::load(view, fetch).await?;
        args.apply(list.view_mut());
        self.print_page(title, &list, item);
        Ok(list)
    }

    /// Runs a mutation against a listed collection and prints the refreshed
    /// first page.
    async fn mutate_listed<T, R, F, M>(
        &self,
        title: &str,
        load: F,
        mutation: M,
        refresh: F,
        item: fn(&T) -> String,
    ) -> Result<R>
    where
        T: Listable + Clone + Serialize,
        F: Future<Output = eventhub_client::Result<Vec<T>>>,
        M: Future<Output = eventhub_client::Result<R>>,
    {
        let view = ListArgs::default().view::<T>(self.page_size)?;
        let mut list = RemoteListView::load(view, load).await?;
        let outcome = list.mutate(mutation, refresh).await?;
        if !self.quiet {
            self.print_page(title, &list, item);
        }
        Ok(outcome)
    }
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default_filter = if verbose {
        "eventhub_client=debug"
    } else if quiet {
        "eventhub_client=warn"
    } else {
        "eventhub_client=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Decodes the session token. An unusable token is logged and ignored; the
/// server still rejects it on requests that need it.
fn load_session(token: Option<&str>) -> Option<SessionContext> {
    let token = token?;
    match SessionContext::from_token(token, &JwtClaimsDecoder, Utc::now()) {
        Ok(session) => {
            tracing::debug!(user_id = %session.user_id(), role = %session.role(), "session loaded");
            Some(session)
        }
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unusable session token");
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let mut config = ClientConfig::from_env();
    config.base_url = cli.base_url.clone();
    if cli.token.is_some() {
        config.token = cli.token.clone();
    }

    let app = App {
        client: EventhubClient::from_config(&config)?,
        session: load_session(config.token.as_deref()),
        format: cli.format,
        quiet: cli.quiet,
        page_size: config.page_size,
    };

    match cli.command {
        Commands::Events(events_cmd) => {
            use eventhub_client::cli::events::EventsAction;
            match events_cmd.action {
                EventsAction::List(args) => {
                    app.list("EVENTS", &args, app.client.list_events(), pretty::format_event)
                        .await?;
                }
                EventsAction::Get { id } => {
                    let event = app.client.get_event(id).await?;
                    app.print(&event, pretty::format_event);
                }
                EventsAction::Create {
                    title,
                    starts_at,
                    ends_at,
                    visibility,
                    description,
                    location,
                } => {
                    validate_event(&title, starts_at, ends_at)?;
                    let mut req = CreateEventRequest::new(title, starts_at, ends_at)
                        .with_visibility(visibility.into());
                    if let Some(description) = description {
                        req = req.with_description(description);
                    }
                    if let Some(location) = location {
                        req = req.with_location(location);
                    }
                    let event = app.client.create_event(&req).await?;
                    app.print(&event, |e| format!("Created:\n{}", pretty::format_event(e)));
                }
                EventsAction::Update {
                    id,
                    title,
                    starts_at,
                    ends_at,
                    visibility,
                    description,
                    location,
                } => {
                    let current = app.client.get_event(id).await?;
                    if let Some(session) = &app.session {
                        if !session.can_manage_event(&current) {
                            return Err(ClientError::Forbidden(
                                "only the organizer or an administrator can edit this event"
                                    .to_string(),
                            )
                            .into());
                        }
                    }

                    let req = UpdateEventRequest {
                        title,
                        starts_at,
                        ends_at,
                        visibility: visibility.map(Into::into),
                        description,
                        location,
                    };
                    let mut preview = current;
                    req.clone().apply_to(&mut preview);
                    validate_event(&preview.title, preview.starts_at, preview.ends_at)?;

                    let event = app.client.update_event(id, &req).await?;
                    app.print(&event, |e| format!("Updated:\n{}", pretty::format_event(e)));
                }
                EventsAction::Delete { id } => {
                    app.client.delete_event(id).await?;
                    app.notice(format!("Deleted event {}", id));
                }
            }
        }
        Commands::Users(users_cmd) => {
            use eventhub_client::cli::users::UsersAction;
            app.require_admin()?;
            match users_cmd.action {
                UsersAction::List(args) => {
                    app.list("USERS", &args, app.client.list_users(), pretty::format_user)
                        .await?;
                }
                UsersAction::Get { id } => {
                    let user = app.client.get_user(id).await?;
                    app.print(&user, pretty::format_user);
                }
                UsersAction::SetRole { id, role } => {
                    let user = app.client.set_user_role(id, role.into()).await?;
                    app.print(&user, |u| format!("Updated:\n{}", pretty::format_user(u)));
                }
                UsersAction::Activate { id } => {
                    let user = app.client.set_user_active(id, true).await?;
                    app.print(&user, |u| format!("Activated:\n{}", pretty::format_user(u)));
                }
                UsersAction::Deactivate { id } => {
                    let user = app.client.set_user_active(id, false).await?;
                    app.print(&user, |u| format!("Deactivated:\n{}", pretty::format_user(u)));
                }
                UsersAction::Delete { id } => {
                    app.client.delete_user(id).await?;
                    app.notice(format!("Deleted user {}", id));
                }
            }
        }
        Commands::Invitations(invitations_cmd) => {
            use eventhub_client::cli::invitations::InvitationsAction;
            match invitations_cmd.action {
                InvitationsAction::List {
                    event_id: Some(event_id),
                    list,
                } => {
                    app.list(
                        "INVITATIONS",
                        &list,
                        app.client.list_event_invitations(event_id),
                        pretty::format_invitation,
                    )
                    .await?;
                }
                InvitationsAction::List {
                    event_id: None,
                    list,
                } => {
                    app.list(
                        "INVITATIONS",
                        &list,
                        app.client.list_my_invitations(),
                        pretty::format_invitation,
                    )
                    .await?;
                }
                InvitationsAction::Send { event_id, email } => {
                    let invitation = app
                        .mutate_listed(
                            "INVITATIONS",
                            app.client.list_event_invitations(event_id),
                            app.client.send_invitation(event_id, &email),
                            app.client.list_event_invitations(event_id),
                            pretty::format_invitation,
                        )
                        .await?;
                    app.notice(format!("Invited {}", invitation.invitee_email));
                }
                InvitationsAction::Accept { id } => {
                    let invitation = app
                        .client
                        .respond_to_invitation(id, InvitationResponse::Accept)
                        .await?;
                    app.print(&invitation, pretty::format_invitation);
                }
                InvitationsAction::Decline { id } => {
                    let invitation = app
                        .client
                        .respond_to_invitation(id, InvitationResponse::Decline)
                        .await?;
                    app.print(&invitation, pretty::format_invitation);
                }
            }
        }
        Commands::JoinRequests(join_requests_cmd) => {
            use eventhub_client::cli::join_requests::JoinRequestsAction;
            match join_requests_cmd.action {
                JoinRequestsAction::List { event_id, list } => {
                    let view = app
                        .list(
                            "JOIN REQUESTS",
                            &list,
                            app.client.list_join_requests(event_id),
                            pretty::format_join_request,
                        )
                        .await?;
                    if matches!(app.format, OutputFormat::Pretty) {
                        let pending = pending_join_requests(view.view().collection()).len();
                        app.notice(format!("{} pending", pending));
                    }
                }
                JoinRequestsAction::Create { event_id, message } => {
                    let request = app.client.request_to_join(event_id, message).await?;
                    app.print(&request, pretty::format_join_request);
                }
                JoinRequestsAction::Approve { event_id, id } => {
                    app.mutate_listed(
                        "JOIN REQUESTS",
                        app.client.list_join_requests(event_id),
                        app.client.review_join_request(id, ReviewDecision::Approve),
                        app.client.list_join_requests(event_id),
                        pretty::format_join_request,
                    )
                    .await?;
                }
                JoinRequestsAction::Reject { event_id, id } => {
                    app.mutate_listed(
                        "JOIN REQUESTS",
                        app.client.list_join_requests(event_id),
                        app.client.review_join_request(id, ReviewDecision::Reject),
                        app.client.list_join_requests(event_id),
                        pretty::format_join_request,
                    )
                    .await?;
                }
            }
        }
        Commands::Members(members_cmd) => {
            use eventhub_client::cli::members::MembersAction;
            match members_cmd.action {
                MembersAction::List { event_id, list } => {
                    app.list(
                        "MEMBERS",
                        &list,
                        app.client.list_members(event_id),
                        pretty::format_member,
                    )
                    .await?;
                }
                MembersAction::Remove { event_id, user_id } => {
                    app.mutate_listed(
                        "MEMBERS",
                        app.client.list_members(event_id),
                        app.client.remove_member(event_id, user_id),
                        app.client.list_members(event_id),
                        pretty::format_member,
                    )
                    .await?;
                }
            }
        }
        Commands::Forum(forum_cmd) => {
            use eventhub_client::cli::forums::ForumAction;
            match forum_cmd.action {
                ForumAction::List { event_id, list } => {
                    app.list(
                        "POSTS",
                        &list,
                        app.client.list_posts(event_id),
                        pretty::format_post,
                    )
                    .await?;
                }
                ForumAction::Post { event_id, body } => {
                    validate_post(&body)?;
                    let post = app.client.create_post(event_id, &body).await?;
                    app.print(&post, pretty::format_post);
                }
            }
        }
        Commands::Notifications(notifications_cmd) => {
            use eventhub_client::cli::notifications::NotificationsAction;
            use tokio_stream::StreamExt;
            match notifications_cmd.action {
                NotificationsAction::List(args) => {
                    app.list(
                        "NOTIFICATIONS",
                        &args,
                        app.client.list_notifications(),
                        pretty::format_notification,
                    )
                    .await?;
                }
                NotificationsAction::Read { id } => {
                    let notification = app.client.mark_notification_read(id).await?;
                    app.print(&notification, pretty::format_notification);
                }
                NotificationsAction::Watch { last_event_id } => {
                    app.notice("Watching notifications...");
                    let stream = app.client.watch_notifications(last_event_id).await?;
                    tokio::pin!(stream);
                    while let Some(result) = stream.next().await {
                        match result {
                            Ok(notification) => {
                                app.print(&notification, pretty::format_notification)
                            }
                            Err(e) => {
                                tracing::warn!(error = %e, "notification stream closed");
                                return Err(e.into());
                            }
                        }
                    }
                }
            }
        }
        Commands::Reminders(reminders_cmd) => {
            use eventhub_client::cli::reminders::RemindersAction;
            match reminders_cmd.action {
                RemindersAction::List(args) => {
                    app.list(
                        "REMINDERS",
                        &args,
                        app.client.list_reminders(),
                        pretty::format_reminder,
                    )
                    .await?;
                }
                RemindersAction::Create {
                    event_id,
                    remind_at,
                    note,
                } => {
                    let event = app.client.get_event(event_id).await?;
                    validate_reminder(remind_at, &event)?;
                    let reminder = app
                        .client
                        .create_reminder(&CreateReminderRequest {
                            event_id,
                            remind_at,
                            note,
                        })
                        .await?;
                    app.print(&reminder, |r| {
                        format!("Created:\n{}", pretty::format_reminder(r))
                    });
                }
                RemindersAction::Delete { id } => {
                    app.client.delete_reminder(id).await?;
                    app.notice(format!("Deleted reminder {}", id));
                }
            }
        }
        Commands::Settings(settings_cmd) => {
            use eventhub_client::cli::settings::SettingsAction;
            match settings_cmd.action {
                SettingsAction::Show => {
                    let settings = app.client.get_settings().await?;
                    app.print(&settings, pretty::format_settings);
                }
                SettingsAction::Update {
                    allow_public_events,
                    max_event_capacity,
                    default_page_size,
                    maintenance_mode,
                } => {
                    app.require_admin()?;
                    let req = UpdateSettingsRequest {
                        allow_public_events,
                        max_event_capacity,
                        default_page_size,
                        maintenance_mode,
                    };
                    if req.is_empty() {
                        return Err(
                            ClientError::InvalidInput("no settings to update".to_string()).into(),
                        );
                    }
                    if default_page_size == Some(0) {
                        return Err(ClientError::InvalidInput(
                            "default page size must be greater than zero".to_string(),
                        )
                        .into());
                    }
                    let settings = app.client.update_settings(&req).await?;
                    app.print(&settings, pretty::format_settings);
                }
            }
        }
        Commands::Health(health_cmd) => {
            use eventhub_client::cli::health::HealthAction;
            match health_cmd.action {
                HealthAction::Check => {
                    let health = app.client.health().await?;
                    app.print(&health, pretty::format_health);
                }
            }
        }
        Commands::Whoami => {
            let session = app.session()?;
            match app.format {
                OutputFormat::Json => println!("{}", format_output(session.claims(), app.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_session(session)),
            }
        }
    }

    Ok(())
}

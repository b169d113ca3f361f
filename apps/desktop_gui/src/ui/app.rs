use std::path::PathBuf;

use client_core::{
    onboarding::LocationDecision, profile::SUGGESTED_INTERESTS, CandidateDeck, GesturePhase,
    ImagePickOutcome, ImagePicker, LocationPermission, OnboardingFlow, OnboardingStep,
    ProfileDraft, SwipeController, SwipeDirection, SwipeEvent,
};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui::{self, Color32, RichText, Vec2};
use shared::domain::{Gender, ProfileRecord};
use tracing::{info, warn};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::media::ThumbnailCache;
use crate::platform::{DialogLocationPermission, RfdImagePicker};
use crate::ui::swipe_card::{draw_candidate_card, CardVisual};

const ACCENT: Color32 = Color32::from_rgb(0, 122, 255);
const SWIPE_LEFT_COLOR: Color32 = Color32::from_rgb(255, 107, 107);
const SWIPE_RIGHT_COLOR: Color32 = Color32::from_rgb(78, 205, 196);
const CHAT_COLOR: Color32 = Color32::from_rgb(95, 39, 205);
const THUMBNAIL_SIZE: f32 = 84.0;

/// Filesystem locations for the app's local data.
#[derive(Debug, Clone)]
pub struct AppPaths {
    pub data_root: PathBuf,
    pub db_path: PathBuf,
}

impl AppPaths {
    pub fn resolve(data_dir: Option<PathBuf>) -> anyhow::Result<Self> {
        let root = if let Some(dir) = data_dir {
            dir
        } else {
            let base = dirs::data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("unable to resolve local app data dir"))?;
            base.join("proximity_match")
        };
        Ok(Self {
            db_path: root.join("client.sqlite3"),
            data_root: root,
        })
    }

    pub fn database_url(&self) -> String {
        format!(
            "sqlite://{}",
            self.db_path.to_string_lossy().replace('\\', "/")
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Onboarding,
    Home,
    Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusSeverity {
    Info,
    Error,
}

#[derive(Debug, Clone)]
struct StatusBanner {
    severity: StatusSeverity,
    message: String,
}

impl StatusBanner {
    fn info(message: impl Into<String>) -> Self {
        Self {
            severity: StatusSeverity::Info,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: StatusSeverity::Error,
            message: message.into(),
        }
    }
}

struct OnboardingUi {
    flow: OnboardingFlow,
    password_visible: bool,
    custom_interest_input: String,
}

struct HomeState {
    deck: CandidateDeck,
    controller: SwipeController,
    drag_accum: Vec2,
}

struct InterestModal {
    draft: ProfileDraft,
    input: String,
}

struct ProfileState {
    loading: bool,
    editing: bool,
    draft: ProfileDraft,
    saved: Option<ProfileRecord>,
    interest_modal: Option<InterestModal>,
}

pub struct DesktopGuiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    route: Route,
    status: Option<StatusBanner>,
    onboarding: OnboardingUi,
    home: HomeState,
    profile: ProfileState,
    textures: ThumbnailCache,
    location: Box<dyn LocationPermission>,
    image_picker: Box<dyn ImagePicker>,
}

impl DesktopGuiApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let deck = CandidateDeck::mock();
        // Real width applied on the first frame via set_viewport_width.
        let controller = SwipeController::new(deck.len(), 480.0);
        Self {
            cmd_tx,
            ui_rx,
            route: Route::Onboarding,
            status: None,
            onboarding: OnboardingUi {
                flow: OnboardingFlow::new(),
                password_visible: false,
                custom_interest_input: String::new(),
            },
            home: HomeState {
                deck,
                controller,
                drag_accum: Vec2::ZERO,
            },
            profile: ProfileState {
                loading: false,
                editing: false,
                draft: ProfileDraft::default(),
                saved: None,
                interest_modal: None,
            },
            textures: ThumbnailCache::default(),
            location: Box::new(DialogLocationPermission),
            image_picker: Box::new(RfdImagePicker),
        }
    }

    /// Fire-and-forget navigation; entering the profile screen kicks off a
    /// fresh load from storage.
    fn replace(&mut self, route: Route) {
        info!(?route, "navigate");
        self.route = route;
        self.status = None;
        if route == Route::Profile {
            self.profile.loading = true;
            self.profile.editing = false;
            self.profile.interest_modal = None;
            self.dispatch(BackendCommand::LoadProfile);
        }
    }

    fn dispatch(&mut self, cmd: BackendCommand) {
        if let Err(message) = dispatch_backend_command(&self.cmd_tx, cmd) {
            self.status = Some(StatusBanner::error(message));
        }
    }

    fn set_info(&mut self, message: impl Into<String>) {
        self.status = Some(StatusBanner::info(message));
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.status = Some(StatusBanner::error(message));
    }

    fn drain_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::ProfileLoaded(record) => {
                    self.profile.loading = false;
                    match record {
                        Some(record) => {
                            self.profile.draft = ProfileDraft::from_record(record.clone());
                            self.profile.saved = Some(record);
                        }
                        None => {
                            self.profile.draft = ProfileDraft::default();
                            self.profile.saved = None;
                        }
                    }
                }
                UiEvent::ProfileSaved(record) => {
                    self.profile.draft = ProfileDraft::from_record(record.clone());
                    self.profile.saved = Some(record);
                    self.profile.editing = false;
                    self.profile.interest_modal = None;
                    if self.route == Route::Onboarding {
                        self.replace(Route::Home);
                    } else {
                        self.set_info("Profile saved");
                    }
                }
                UiEvent::Info(message) => self.set_info(message),
                UiEvent::Error(err) => {
                    warn!(context = ?err.context(), category = ?err.category(), message = err.message(), "backend error");
                    self.set_error(err.message().to_string());
                }
            }
        }
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        let Some(banner) = self.status.clone() else {
            return;
        };
        let (fill, text_color) = match banner.severity {
            StatusSeverity::Info => (Color32::from_rgb(230, 242, 255), Color32::from_rgb(0, 82, 170)),
            StatusSeverity::Error => (Color32::from_rgb(255, 235, 235), Color32::from_rgb(170, 30, 30)),
        };
        let mut dismissed = false;
        egui::Frame::NONE
            .fill(fill)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&banner.message).color(text_color));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("Dismiss").clicked() {
                            dismissed = true;
                        }
                    });
                });
            });
        ui.add_space(8.0);
        if dismissed {
            self.status = None;
        }
    }

    // ----- onboarding -------------------------------------------------

    fn show_onboarding(&mut self, ctx: &egui::Context) {
        let (step_index, step_total) = self.onboarding.flow.progress();
        egui::TopBottomPanel::bottom("onboarding_progress").show(ctx, |ui| {
            ui.add_space(8.0);
            progress_indicator(ui, step_index, step_total);
            ui.add_space(8.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    ui.set_width(ui.available_width().clamp(320.0, 420.0));
                    self.show_status_banner(ui);
                    match self.onboarding.flow.step() {
                        OnboardingStep::Account => self.onboarding_account_ui(ui),
                        OnboardingStep::Location => self.onboarding_location_ui(ui),
                        OnboardingStep::Profile => self.onboarding_profile_ui(ui),
                    }
                });
                ui.add_space(24.0);
            });
        });
    }

    fn onboarding_account_ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Welcome to ProximityMatch");
        ui.add_space(16.0);

        ui.add(
            egui::TextEdit::singleline(&mut self.onboarding.flow.account.email)
                .hint_text("Email")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let eye_width = 30.0;
            ui.add_sized(
                [ui.available_width() - eye_width, 20.0],
                egui::TextEdit::singleline(&mut self.onboarding.flow.account.password)
                    .hint_text("Password")
                    .password(!self.onboarding.password_visible),
            );
            let eye = if self.onboarding.password_visible {
                "🙈"
            } else {
                "👁"
            };
            if ui.small_button(eye).clicked() {
                self.onboarding.password_visible = !self.onboarding.password_visible;
            }
        });
        ui.add_space(12.0);

        if primary_button(ui, "Create Account").clicked() {
            match self.onboarding.flow.create_account() {
                Ok(()) => self.status = None,
                Err(err) => self.set_error(err.to_string()),
            }
        }
    }

    fn onboarding_location_ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Location Access");
        ui.add_space(8.0);
        ui.weak("We need your location to help you connect with people nearby");
        ui.add_space(16.0);

        if primary_button(ui, "Allow Location Access").clicked() {
            let outcome = self.location.request_location();
            match self.onboarding.flow.apply_location_outcome(outcome) {
                LocationDecision::Advanced => self.status = None,
                LocationDecision::Blocked => {
                    self.set_error("Please enable location to continue using the app")
                }
            }
        }
        ui.add_space(6.0);
        if secondary_button(ui, "Go Back").clicked() {
            self.onboarding.flow.go_back();
        }
    }

    fn onboarding_profile_ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Complete Your Profile");
        ui.add_space(12.0);

        ui.label("Upload Photos (Max 5)");
        ui.add_space(4.0);
        if let Some(banner) = gallery_ui(
            ui,
            &mut self.onboarding.flow.draft,
            &mut self.textures,
            self.image_picker.as_ref(),
            true,
        ) {
            self.status = Some(banner);
        }
        ui.add_space(10.0);

        ui.add(
            egui::TextEdit::singleline(&mut self.onboarding.flow.draft.name)
                .hint_text("Your Name")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(6.0);
        ui.add(
            egui::TextEdit::singleline(&mut self.onboarding.flow.draft.age)
                .hint_text("Your Age")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            for gender in Gender::ALL {
                let selected = self.onboarding.flow.draft.gender == Some(gender);
                if ui.selectable_label(selected, gender.label()).clicked() {
                    self.onboarding.flow.draft.gender = Some(gender);
                }
            }
        });
        ui.add_space(10.0);

        custom_interest_input_ui(
            ui,
            &mut self.onboarding.custom_interest_input,
            &mut self.onboarding.flow.draft,
        );
        ui.add_space(8.0);
        ui.label(RichText::new("Select Your Interests").strong());
        ui.add_space(4.0);
        interest_selector_ui(ui, &mut self.onboarding.flow.draft);
        ui.add_space(16.0);

        if primary_button(ui, "Complete Profile").clicked() {
            match self.onboarding.flow.complete() {
                // Navigation to Home happens once storage confirms the save.
                Ok(record) => self.dispatch(BackendCommand::SaveProfile(record)),
                Err(err) => self.set_error(err.to_string()),
            }
        }
        ui.add_space(6.0);
        if secondary_button(ui, "Go Back").clicked() {
            self.onboarding.flow.go_back();
        }
    }

    // ----- home -------------------------------------------------------

    fn show_home(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("home_top_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui
                    .button(RichText::new("👤").size(20.0))
                    .on_hover_text("My Profile")
                    .clicked()
                {
                    self.replace(Route::Profile);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    // Settings has no behavior yet, matching the prototype.
                    let _ = ui.button(RichText::new("⚙").size(20.0)).on_hover_text("Settings");
                });
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("home_action_bar").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let spacing = (ui.available_width() - 3.0 * 52.0) / 4.0;
                ui.add_space(spacing.max(0.0));
                if round_button(ui, "◀", SWIPE_LEFT_COLOR).clicked() {
                    self.home.controller.swipe(SwipeDirection::Left);
                }
                ui.add_space(spacing.max(0.0));
                let _ = round_button(ui, "💬", CHAT_COLOR).on_hover_text("Chat");
                ui.add_space(spacing.max(0.0));
                if round_button(ui, "▶", SWIPE_RIGHT_COLOR).clicked() {
                    self.home.controller.swipe(SwipeDirection::Right);
                }
            });
            ui.add_space(8.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_status_banner(ui);
            let container = ui.available_rect_before_wrap().shrink(8.0);
            self.home.controller.set_viewport_width(container.width());

            let current_index = self.home.controller.current_index();
            let next = self.home.deck.peek_next(current_index);
            draw_candidate_card(ui, container, next, &CardVisual::background());

            let (offset_x, offset_y) = self.home.controller.offset();
            let visual = CardVisual {
                offset: Vec2::new(offset_x, offset_y),
                rotation_degrees: self.home.controller.rotation_degrees(),
                opacity: self.home.controller.opacity(),
                scale: 1.0,
            };
            let current = self.home.deck.get(current_index);
            let card = draw_candidate_card(ui, container, current, &visual);

            let response = ui.allocate_rect(card, egui::Sense::drag());
            if response.drag_started() {
                self.home.drag_accum = Vec2::ZERO;
                self.home
                    .controller
                    .handle_gesture(GesturePhase::Begin, 0.0, 0.0);
            }
            if response.dragged() {
                self.home.drag_accum += response.drag_delta();
                self.home.controller.handle_gesture(
                    GesturePhase::Active,
                    self.home.drag_accum.x,
                    self.home.drag_accum.y,
                );
            }
            if response.drag_stopped() {
                let translation = self.home.drag_accum;
                self.home
                    .controller
                    .handle_gesture(GesturePhase::End, translation.x, translation.y);
                self.home.drag_accum = Vec2::ZERO;
            }

            let dt = ui.ctx().input(|i| i.stable_dt);
            if let Some(event) = self.home.controller.tick(dt) {
                match event {
                    SwipeEvent::Committed {
                        direction,
                        new_index,
                    } => {
                        info!(?direction, new_index, "swipe committed");
                    }
                    SwipeEvent::Cancelled => {}
                }
            }
            if self.home.controller.is_animating() {
                ui.ctx().request_repaint();
            }
        });
    }

    // ----- profile ----------------------------------------------------

    fn show_profile(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("profile_header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui
                    .button(RichText::new("←").size(20.0))
                    .on_hover_text("Back")
                    .clicked()
                {
                    self.replace(Route::Home);
                    return;
                }
                ui.heading("My Profile");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.profile.editing {
                        if ui
                            .button(RichText::new("💾").size(18.0))
                            .on_hover_text("Save")
                            .clicked()
                        {
                            self.save_profile_edits();
                        }
                        if ui.small_button("Cancel").clicked() {
                            self.cancel_profile_edits();
                        }
                    } else if !self.profile.loading
                        && ui
                            .button(RichText::new("✏").size(18.0))
                            .on_hover_text("Edit")
                            .clicked()
                    {
                        self.profile.editing = true;
                    }
                });
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(8.0);
                self.show_status_banner(ui);

                if self.profile.loading {
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.add(egui::Spinner::new());
                        ui.weak("Loading profile…");
                    });
                    return;
                }

                if let Some(banner) = gallery_ui(
                    ui,
                    &mut self.profile.draft,
                    &mut self.textures,
                    self.image_picker.as_ref(),
                    self.profile.editing,
                ) {
                    self.status = Some(banner);
                }
                ui.add_space(10.0);

                if self.profile.editing {
                    ui.add(
                        egui::TextEdit::singleline(&mut self.profile.draft.name)
                            .hint_text("Name")
                            .desired_width(f32::INFINITY),
                    );
                    ui.add_space(6.0);
                    ui.add(
                        egui::TextEdit::singleline(&mut self.profile.draft.age)
                            .hint_text("Age")
                            .desired_width(f32::INFINITY),
                    );
                    ui.add_space(6.0);
                    ui.add(
                        egui::TextEdit::multiline(&mut self.profile.draft.description)
                            .hint_text("Tell us about yourself")
                            .desired_rows(4)
                            .desired_width(f32::INFINITY),
                    );
                } else {
                    ui.heading(format!(
                        "{}, {}",
                        self.profile.draft.name, self.profile.draft.age
                    ));
                    if !self.profile.draft.description.is_empty() {
                        ui.weak(&self.profile.draft.description);
                    }
                }
                ui.add_space(14.0);

                ui.horizontal(|ui| {
                    ui.label(RichText::new("Interests").strong().size(17.0));
                    if self.profile.editing
                        && ui.small_button(RichText::new("Add").color(ACCENT)).clicked()
                    {
                        self.profile.interest_modal = Some(InterestModal {
                            draft: self.profile.draft.clone(),
                            input: String::new(),
                        });
                    }
                });
                ui.add_space(4.0);
                selected_interest_chips_ui(ui, &mut self.profile.draft, self.profile.editing);
                ui.add_space(16.0);
            });
        });

        self.show_interest_modal(ctx);
    }

    fn show_interest_modal(&mut self, ctx: &egui::Context) {
        let mut save = false;
        let mut cancel = false;
        if let Some(modal) = self.profile.interest_modal.as_mut() {
            egui::Window::new("Select Interests")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.set_width(320.0);
                    custom_interest_input_ui(ui, &mut modal.input, &mut modal.draft);
                    ui.add_space(8.0);
                    interest_selector_ui(ui, &mut modal.draft);
                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        if ui.button("Cancel").clicked() {
                            cancel = true;
                        }
                        if primary_button(ui, "Save").clicked() {
                            save = true;
                        }
                    });
                });
        }

        if save {
            if let Some(modal) = self.profile.interest_modal.take() {
                self.profile.draft.interests = modal.draft.interests;
                self.profile.draft.custom_interests = modal.draft.custom_interests;
            }
        } else if cancel {
            self.profile.interest_modal = None;
        }
    }

    /// Validation must pass before any storage write is queued.
    fn save_profile_edits(&mut self) {
        match self.profile.draft.validate_for_save() {
            Ok(()) => {
                let record = self.profile.draft.to_record();
                self.dispatch(BackendCommand::SaveProfile(record));
            }
            Err(err) => self.set_error(err.to_string()),
        }
    }

    /// Discards edits by re-reading the stored record; in-memory state
    /// reverts to whatever was last persisted.
    fn cancel_profile_edits(&mut self) {
        self.profile.editing = false;
        self.profile.interest_modal = None;
        if let Some(saved) = self.profile.saved.clone() {
            self.profile.draft = ProfileDraft::from_record(saved);
        } else {
            self.profile.loading = true;
            self.dispatch(BackendCommand::LoadProfile);
        }
    }
}

impl eframe::App for DesktopGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_ui_events();
        match self.route {
            Route::Onboarding => self.show_onboarding(ctx),
            Route::Home => self.show_home(ctx),
            Route::Profile => self.show_profile(ctx),
        }
    }
}

// ----- shared widgets --------------------------------------------------

fn primary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.add_sized(
        [ui.available_width().min(360.0), 40.0],
        egui::Button::new(RichText::new(text).strong().color(Color32::WHITE))
            .fill(ACCENT)
            .corner_radius(10.0),
    )
}

fn secondary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.add_sized(
        [ui.available_width().min(360.0), 40.0],
        egui::Button::new(RichText::new(text).strong().color(ACCENT))
            .fill(Color32::TRANSPARENT)
            .stroke(egui::Stroke::new(1.0, ACCENT))
            .corner_radius(10.0),
    )
}

fn round_button(ui: &mut egui::Ui, label: &str, fill: Color32) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(label).size(20.0).color(Color32::WHITE))
            .fill(fill)
            .min_size(Vec2::splat(52.0))
            .corner_radius(26.0),
    )
}

fn progress_indicator(ui: &mut egui::Ui, current: usize, total: usize) {
    let step_size = Vec2::new(50.0, 6.0);
    let gap = 8.0;
    let total_width = total as f32 * step_size.x + (total as f32 - 1.0) * gap;
    ui.horizontal(|ui| {
        ui.add_space(((ui.available_width() - total_width) / 2.0).max(0.0));
        for index in 0..total {
            let (rect, _) = ui.allocate_exact_size(step_size, egui::Sense::hover());
            let color = if index <= current {
                ACCENT
            } else {
                Color32::from_gray(224)
            };
            ui.painter().rect_filled(rect, 3.0, color);
        }
    });
}

/// Image gallery shared by the onboarding profile step and the profile
/// editor. Returns a banner to surface (duplicate notice or cap rejection).
fn gallery_ui(
    ui: &mut egui::Ui,
    draft: &mut ProfileDraft,
    textures: &mut ThumbnailCache,
    picker: &dyn ImagePicker,
    editing: bool,
) -> Option<StatusBanner> {
    let mut banner = None;
    let mut removed: Option<String> = None;

    ui.horizontal_wrapped(|ui| {
        for uri in draft.images.clone() {
            ui.vertical(|ui| {
                match textures.texture(ui.ctx(), &uri) {
                    Some(texture) => {
                        ui.add(
                            egui::Image::new(&texture)
                                .fit_to_exact_size(Vec2::splat(THUMBNAIL_SIZE))
                                .corner_radius(8.0),
                        );
                    }
                    None => {
                        let (rect, _) = ui.allocate_exact_size(
                            Vec2::splat(THUMBNAIL_SIZE),
                            egui::Sense::hover(),
                        );
                        ui.painter()
                            .rect_filled(rect, 8.0, Color32::from_gray(225));
                        ui.painter().text(
                            rect.center(),
                            egui::Align2::CENTER_CENTER,
                            "🖼",
                            egui::FontId::proportional(24.0),
                            Color32::from_gray(120),
                        );
                    }
                }
                if editing && ui.small_button("✕").clicked() {
                    removed = Some(uri.clone());
                }
            });
        }

        if editing && draft.remaining_image_slots() > 0 {
            let add_tile = ui.add_sized(
                Vec2::splat(THUMBNAIL_SIZE),
                egui::Button::new(RichText::new("+").size(26.0).color(ACCENT))
                    .corner_radius(8.0),
            );
            if add_tile.clicked() {
                match picker.pick_images(draft.remaining_image_slots()) {
                    ImagePickOutcome::Cancelled => {}
                    ImagePickOutcome::Picked(uris) => match draft.add_images(uris) {
                        Ok(outcome) => {
                            if outcome.duplicates_skipped > 0 {
                                banner =
                                    Some(StatusBanner::info("You have already added this image."));
                            }
                        }
                        Err(err) => banner = Some(StatusBanner::error(err.to_string())),
                    },
                }
            }
        }
    });

    if let Some(uri) = removed {
        draft.remove_image(&uri);
        textures.retain_uris(&draft.images);
    }
    banner
}

fn custom_interest_input_ui(ui: &mut egui::Ui, input: &mut String, draft: &mut ProfileDraft) {
    let response = ui.add(
        egui::TextEdit::singleline(input)
            .hint_text("Add Custom Interest")
            .desired_width(f32::INFINITY),
    );
    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        draft.add_custom_interest(input);
        input.clear();
        response.request_focus();
    }
}

/// Toggleable chips: the suggested presets plus any custom entries.
fn interest_selector_ui(ui: &mut egui::Ui, draft: &mut ProfileDraft) {
    ui.horizontal_wrapped(|ui| {
        for label in SUGGESTED_INTERESTS {
            if ui
                .selectable_label(draft.is_interest_selected(label), label)
                .clicked()
            {
                draft.toggle_interest(label);
            }
        }
        // Custom chips are selected for as long as they exist; clicking one
        // removes it.
        for label in draft.custom_interests.clone() {
            if ui.selectable_label(true, &label).clicked() {
                draft.remove_interest(&label);
            }
        }
    });
}

/// Read-only chip row of everything selected; in edit mode each chip grows
/// a delete button that clears it from both preset and custom lists.
fn selected_interest_chips_ui(ui: &mut egui::Ui, draft: &mut ProfileDraft, editing: bool) {
    let mut removed: Option<String> = None;
    ui.horizontal_wrapped(|ui| {
        for label in draft.selected_interests() {
            let _ = ui.selectable_label(true, &label);
            if editing && ui.small_button("×").clicked() {
                removed = Some(label);
            }
        }
    });
    if let Some(label) = removed {
        draft.remove_interest(&label);
    }
}

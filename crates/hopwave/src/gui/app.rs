use crate::config::{self, Config};
use crate::events::{Action, AppEvent, ControlCommand, Target};
use crate::gui::indicator::IndicatorArea;
use crate::gui::theme;
use gtk::prelude::*;
use gtk4 as gtk;
use hopwave_core::{SegmentedHopIndicator, WaveIndicator};
use relm4::prelude::*;
use std::path::PathBuf;

pub struct AppModel {
    pub config_path: PathBuf,
    pub linear: IndicatorArea,
    pub wave: IndicatorArea,
}

#[derive(Debug)]
pub enum AppMsg {
    /// The "Animate" button.
    Toggle,
    Control(ControlCommand),
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Control(command) => AppMsg::Control(command),
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Config, PathBuf, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        gtk::ApplicationWindow {
            set_title: Some("hopwave"),
            set_default_size: (480, 560),
            add_css_class: "hopwave-window",

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 24,
                set_margin_top: 24,
                set_margin_bottom: 24,
                set_valign: gtk::Align::Center,

                #[local_ref]
                wave_area -> gtk::DrawingArea {},

                #[local_ref]
                linear_area -> gtk::DrawingArea {},

                gtk::Button {
                    set_label: "Animate",
                    set_halign: gtk::Align::Center,
                    connect_clicked => AppMsg::Toggle,
                },
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, config_path, rx) = init;

        theme::load_css();

        let model = AppModel {
            config_path,
            linear: IndicatorArea::new(Box::new(SegmentedHopIndicator::new(&config.linear))),
            wave: IndicatorArea::new(Box::new(WaveIndicator::new(&config.wave))),
        };

        let wave_area = model.wave.widget();
        let linear_area = model.linear.widget();
        let widgets = view_output!();

        model.wave.start();
        model.linear.start();

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Toggle => {
                self.linear.toggle();
                log::debug!("Animate pressed, started: {}", self.linear.is_started());
            }
            AppMsg::Control(command) => {
                log::info!("Control command: {}", command);
                self.apply(command);
            }
            AppMsg::ConfigReload => match config::load_config(&self.config_path) {
                Ok(new_config) => {
                    self.linear
                        .replace(Box::new(SegmentedHopIndicator::new(&new_config.linear)));
                    self.wave
                        .replace(Box::new(WaveIndicator::new(&new_config.wave)));
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}

impl AppModel {
    fn targets(&self, target: Target) -> Vec<&IndicatorArea> {
        match target {
            Target::Linear => vec![&self.linear],
            Target::Wave => vec![&self.wave],
            Target::All => vec![&self.wave, &self.linear],
        }
    }

    fn apply(&self, command: ControlCommand) {
        for area in self.targets(command.target) {
            match command.action {
                Action::Start => area.start(),
                Action::Stop => area.stop(),
                Action::Toggle => area.toggle(),
            }
        }
    }
}

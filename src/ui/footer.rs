//! Footer UI rendering
//!
//! A solid bar pinned to the bottom of the window with the logo, the
//! postal address and the informational links.

use crate::ui::gem_logo;
use crate::ui::panel_manager::NavTarget;
use bloomgrid::ThemeColors;
use egui::{Align, Align2, Id, Layout, Order, RichText};

const ADDRESS_LINES: [&str; 2] = ["Wegter Brands, Deventerstraat ll,", "7575 EM Oldenzaal, Nederland"];

const FOOTER_LINKS: [NavTarget; 3] = [NavTarget::AboutUs, NavTarget::ShippingPolicy, NavTarget::ContactUs];

/// Renders the footer bar across the full window width.
///
/// Returns the link clicked this frame, if any.
pub fn render_footer(ctx: &egui::Context, colors: &ThemeColors) -> Option<NavTarget> {
    let mut clicked = None;
    let width = ctx.content_rect().width();

    egui::Area::new(Id::new("footer"))
        .order(Order::Foreground)
        .anchor(Align2::LEFT_BOTTOM, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            egui::Frame::NONE
                .fill(colors.footer_background)
                .inner_margin(egui::Margin::symmetric(32, 24))
                .show(ui, |ui| {
                    ui.set_width(width - 64.0);
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 24.0;
                        gem_logo::gem_logo(ui, 48.0);

                        ui.vertical(|ui| {
                            for line in ADDRESS_LINES {
                                ui.label(RichText::new(line).size(18.0).color(colors.accent));
                            }
                        });

                        ui.with_layout(Layout::top_down(Align::Max), |ui| {
                            ui.spacing_mut().item_spacing.y = 8.0;
                            for target in FOOTER_LINKS {
                                let link = ui.link(RichText::new(target.label()).size(24.0).color(colors.accent));
                                if link.clicked() {
                                    clicked = Some(target);
                                }
                            }
                        });
                    });
                });
        });

    clicked
}

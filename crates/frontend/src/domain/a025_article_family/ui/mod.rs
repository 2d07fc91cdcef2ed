pub mod subfamily_panel;

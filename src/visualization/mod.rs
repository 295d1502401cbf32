pub mod rope_vis3d;

pub mod report_read_model;

pub use report_read_model::{
    DescriptorView, MetadataView, ReportReadModel, ReportReadModelBuilder, SwitchView,
};

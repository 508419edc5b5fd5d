pub(crate) mod academic;
pub(crate) mod classic;
pub(crate) mod modern;
pub(crate) mod scene;
pub(crate) mod studio;
pub(crate) mod style;

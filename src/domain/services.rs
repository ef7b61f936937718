use serde::{Deserialize, Serialize};

/// Flat size of a home move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HomeSize {
    OneBhk,
    TwoBhk,
    ThreeBhk,
    Villa,
}

/// Scale of an office relocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OfficeScale {
    Small,
    Medium,
    Corporate,
}

/// Category of a goods-only transport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GoodsCategory {
    Furniture,
    Electronics,
    Industrial,
}

/// A concrete bookable service. The sub-type rides inside the service type,
/// so a (type, sub-type) mismatch cannot be constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Service {
    Home(HomeSize),
    Office(OfficeScale),
    Goods(GoodsCategory),
}

/// The three service families offered by the business.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceKind {
    #[default]
    Home,
    Office,
    Goods,
}

const HOME_SERVICES: [Service; 4] = [
    Service::Home(HomeSize::OneBhk),
    Service::Home(HomeSize::TwoBhk),
    Service::Home(HomeSize::ThreeBhk),
    Service::Home(HomeSize::Villa),
];

const OFFICE_SERVICES: [Service; 3] = [
    Service::Office(OfficeScale::Small),
    Service::Office(OfficeScale::Medium),
    Service::Office(OfficeScale::Corporate),
];

const GOODS_SERVICES: [Service; 3] = [
    Service::Goods(GoodsCategory::Furniture),
    Service::Goods(GoodsCategory::Electronics),
    Service::Goods(GoodsCategory::Industrial),
];

impl ServiceKind {
    pub fn all() -> [ServiceKind; 3] {
        [ServiceKind::Home, ServiceKind::Office, ServiceKind::Goods]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceKind::Home => "Home Transport",
            ServiceKind::Office => "Office Shifting",
            ServiceKind::Goods => "Goods Transport",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            ServiceKind::Home => "Door-to-door household shifting, packing included.",
            ServiceKind::Office => "Weekend office moves with minimal downtime.",
            ServiceKind::Goods => "Single-item and bulk goods transport across town.",
        }
    }

    /// Every bookable sub-type of this family, in menu order.
    pub fn services(&self) -> &'static [Service] {
        match self {
            ServiceKind::Home => &HOME_SERVICES,
            ServiceKind::Office => &OFFICE_SERVICES,
            ServiceKind::Goods => &GOODS_SERVICES,
        }
    }

    /// The default selection when this family is picked: its first sub-type.
    pub fn first_service(&self) -> Service {
        self.services()[0]
    }

    pub fn from_label(label: &str) -> Option<ServiceKind> {
        ServiceKind::all()
            .into_iter()
            .find(|kind| kind.label() == label)
    }
}

impl Service {
    /// All ten bookable services across every family.
    pub fn all() -> impl Iterator<Item = Service> {
        ServiceKind::all()
            .into_iter()
            .flat_map(|kind| kind.services().iter().copied())
    }

    pub fn kind(&self) -> ServiceKind {
        match self {
            Service::Home(_) => ServiceKind::Home,
            Service::Office(_) => ServiceKind::Office,
            Service::Goods(_) => ServiceKind::Goods,
        }
    }

    /// Menu label of the sub-type, e.g. "2BHK" or "Corporate Office".
    pub fn label(&self) -> &'static str {
        match self {
            Service::Home(HomeSize::OneBhk) => "1BHK",
            Service::Home(HomeSize::TwoBhk) => "2BHK",
            Service::Home(HomeSize::ThreeBhk) => "3BHK",
            Service::Home(HomeSize::Villa) => "Villa",
            Service::Office(OfficeScale::Small) => "Small Office",
            Service::Office(OfficeScale::Medium) => "Medium Office",
            Service::Office(OfficeScale::Corporate) => "Corporate Office",
            Service::Goods(GoodsCategory::Furniture) => "Furniture",
            Service::Goods(GoodsCategory::Electronics) => "Electronics",
            Service::Goods(GoodsCategory::Industrial) => "Industrial Goods",
        }
    }

    pub fn from_label(label: &str) -> Option<Service> {
        Service::all().find(|service| service.label() == label)
    }
}

impl Default for Service {
    fn default() -> Self {
        ServiceKind::Home.first_service()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_services_across_three_families() {
        assert_eq!(Service::all().count(), 10);
        for kind in ServiceKind::all() {
            assert!(!kind.services().is_empty());
            assert!(kind
                .services()
                .iter()
                .all(|service| service.kind() == kind));
        }
    }

    #[test]
    fn first_service_is_menu_head() {
        assert_eq!(
            ServiceKind::Home.first_service(),
            Service::Home(HomeSize::OneBhk)
        );
        assert_eq!(
            ServiceKind::Office.first_service(),
            Service::Office(OfficeScale::Small)
        );
        assert_eq!(
            ServiceKind::Goods.first_service(),
            Service::Goods(GoodsCategory::Furniture)
        );
    }

    #[test]
    fn labels_round_trip() {
        for service in Service::all() {
            assert_eq!(Service::from_label(service.label()), Some(service));
        }
        for kind in ServiceKind::all() {
            assert_eq!(ServiceKind::from_label(kind.label()), Some(kind));
        }
        assert_eq!(Service::from_label("Helicopter"), None);
    }
}

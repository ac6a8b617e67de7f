use super::{parse_id, CmdMessage};
use crate::crud::EntityDescriptor;
use crate::error::SisuError;

/// Outcome of `rm`. Ids are handled in order and each removal is committed on
/// its own; the first failure stops processing, leaving earlier removals in place.
#[derive(Debug, Default)]
pub struct RemoveReport {
    pub removed: Vec<i64>,
    pub messages: Vec<CmdMessage>,
    pub failure: Option<SisuError>,
}

impl RemoveReport {
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

pub fn run<T, S>(descriptor: &EntityDescriptor<T, S>, store: &mut S, ids: &[String]) -> RemoveReport {
    let mut report = RemoveReport::default();

    for raw in ids {
        let removed = parse_id(raw).and_then(|id| (descriptor.remove)(store, id).map(|()| id));
        match removed {
            Ok(id) => {
                report.removed.push(id);
                report.messages.push(CmdMessage::success(format!(
                    "Removed {} {}",
                    descriptor.singular, id
                )));
            }
            Err(e) => {
                report.failure = Some(e);
                break;
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::descriptor;
    use crate::model::Task;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use crate::store::DataStore;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn removes_each_id_in_order() {
        let mut store = StoreFixture::new().with_tasks(3).store;
        let report = run(&descriptor::<Task, InMemoryStore>(), &mut store, &ids(&["3", "1"]));

        assert!(report.is_complete());
        assert_eq!(report.removed, vec![3, 1]);
        let contents: Vec<&str> = report.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["Removed task 3", "Removed task 1"]);
        assert_eq!(store.list::<Task>().unwrap().len(), 1);
    }

    #[test]
    fn halts_at_the_first_missing_id() {
        let mut store = StoreFixture::new().with_tasks(7).store;
        let report = run(
            &descriptor::<Task, InMemoryStore>(),
            &mut store,
            &ids(&["5", "999", "7"]),
        );

        assert_eq!(report.removed, vec![5]);
        assert!(matches!(
            report.failure,
            Some(SisuError::NotFound { entity: "task", id: 999 })
        ));
        assert!(store.find::<Task>(5).is_err());
        assert!(store.find::<Task>(7).is_ok());
    }

    #[test]
    fn malformed_id_is_fatal() {
        let mut store = StoreFixture::new().with_tasks(2).store;
        let report = run(
            &descriptor::<Task, InMemoryStore>(),
            &mut store,
            &ids(&["1", "two", "2"]),
        );

        assert_eq!(report.removed, vec![1]);
        assert!(matches!(report.failure, Some(SisuError::InvalidId(_))));
        assert!(store.find::<Task>(2).is_ok());
    }
}

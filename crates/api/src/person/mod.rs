use serde::{Deserialize, Serialize};
use threadnest_db_schema::{newtypes::PersonId, source::person::Person};
use threadnest_db_views::structs::ThreadView;

pub mod list_threads;
pub mod read;
pub mod upsert;

/// Onboarding payload. The id comes from the identity provider; everything
/// else is what the person typed into the profile form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertPerson {
  pub person_id: PersonId,
  pub name: String,
  pub username: String,
  pub bio: Option<String>,
  pub avatar: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonResponse {
  pub person: Person,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPerson {
  pub person_id: PersonId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPersonThreads {
  pub person_id: PersonId,
  pub page: Option<i64>,
  pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListPersonThreadsResponse {
  pub threads: Vec<ThreadView>,
}

#[cfg(test)]
mod tests {
  use crate::{
    context::ThreadnestContext,
    person::{
      list_threads::list_person_threads,
      read::get_person,
      upsert::upsert_person,
      GetPerson,
      ListPersonThreads,
      UpsertPerson,
    },
    thread::{create::create_thread, reply::create_reply, CreateReply, CreateThread},
  };
  use pretty_assertions::assert_eq;
  use serial_test::serial;
  use threadnest_db_schema::{newtypes::PersonId, source::person::Person};
  use threadnest_utils::error::{ErrorType, ThreadnestResult};

  fn onboarding_form(id: &str) -> UpsertPerson {
    UpsertPerson {
      person_id: PersonId(id.to_string()),
      name: "Terry Tester".to_string(),
      username: "terry_tester".to_string(),
      bio: Some("hello".to_string()),
      avatar: None,
    }
  }

  #[tokio::test]
  #[serial]
  #[ignore = "requires a running postgres database"]
  async fn test_onboarding_upsert() -> ThreadnestResult<()> {
    let context = ThreadnestContext::init_test_context().await;
    let form = onboarding_form("person_upsert");

    let created = upsert_person(form.clone(), &context).await?.person;
    assert_eq!(form.person_id, created.id);
    assert_eq!("Terry Tester", created.name);
    assert!(created.onboarded);

    // a second onboarding pass for the same id updates in place
    let renamed = upsert_person(
      UpsertPerson {
        name: "Terry Renamed".to_string(),
        ..form.clone()
      },
      &context,
    )
    .await?
    .person;
    assert_eq!(created.id, renamed.id);
    assert_eq!("Terry Renamed", renamed.name);

    let fetched = get_person(
      GetPerson {
        person_id: form.person_id.clone(),
      },
      &context,
    )
    .await?;
    assert_eq!(Some(renamed), fetched);

    let missing = get_person(
      GetPerson {
        person_id: PersonId("never_onboarded".to_string()),
      },
      &context,
    )
    .await?;
    assert_eq!(None, missing);

    match upsert_person(
      UpsertPerson {
        username: "not a username".to_string(),
        ..form.clone()
      },
      &context,
    )
    .await
    {
      Err(e) => assert_eq!(ErrorType::InvalidUsername, e.error_type),
      Ok(_) => panic!("invalid usernames must be rejected"),
    }
    match upsert_person(
      UpsertPerson {
        name: "x".to_string(),
        ..form.clone()
      },
      &context,
    )
    .await
    {
      Err(e) => assert_eq!(ErrorType::InvalidName, e.error_type),
      Ok(_) => panic!("too-short names must be rejected"),
    }
    match upsert_person(
      UpsertPerson {
        bio: Some(String::new()),
        ..form.clone()
      },
      &context,
    )
    .await
    {
      Err(e) => assert_eq!(ErrorType::InvalidBio, e.error_type),
      Ok(_) => panic!("empty bios must be rejected"),
    }
    match upsert_person(
      UpsertPerson {
        avatar: Some("not a url".to_string()),
        ..form.clone()
      },
      &context,
    )
    .await
    {
      Err(e) => assert_eq!(ErrorType::InvalidUrl, e.error_type),
      Ok(_) => panic!("malformed avatar urls must be rejected"),
    }

    Person::delete(&mut context.pool(), &form.person_id).await?;
    Ok(())
  }

  #[tokio::test]
  #[serial]
  #[ignore = "requires a running postgres database"]
  async fn test_profile_thread_listing() -> ThreadnestResult<()> {
    let context = ThreadnestContext::init_test_context().await;
    let person = upsert_person(onboarding_form("person_profile"), &context)
      .await?
      .person;

    let root = create_thread(
      CreateThread {
        content: "a post".to_string(),
        creator_id: person.id.clone(),
        community_id: None,
      },
      &context,
    )
    .await?
    .thread_view
    .thread;
    create_reply(
      CreateReply {
        content: "own reply".to_string(),
        creator_id: person.id.clone(),
        parent_id: root.id,
      },
      &context,
    )
    .await?;

    // the profile tab shows replies too, newest first
    let listed = list_person_threads(
      ListPersonThreads {
        person_id: person.id.clone(),
        page: None,
        limit: None,
      },
      &context,
    )
    .await?;
    assert_eq!(
      vec!["own reply", "a post"],
      listed
        .threads
        .iter()
        .map(|v| v.thread.content.as_str())
        .collect::<Vec<_>>()
    );

    Person::delete(&mut context.pool(), &person.id).await?;
    Ok(())
  }
}
